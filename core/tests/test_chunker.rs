#[cfg(test)]
mod chunker_tests {
    use bytes::Bytes;
    use proptest::prelude::*;
    use chunkbench_core::chunking::{Chunks, chunk_bytes_kb};

    #[test]
    fn exact_multiple_gives_full_chunks() {
        let data = vec![7u8; 4 * 4096];
        let chunks: Vec<Bytes> = chunk_bytes_kb(data, 4).collect();
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|c| c.len() == 4096));
    }

    #[test]
    fn last_chunk_holds_remainder() {
        let data = vec![1u8; 4096 * 2 + 10];
        let chunks: Vec<Bytes> = chunk_bytes_kb(data, 4).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].len(), 10);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        let mut chunks = chunk_bytes_kb(Vec::new(), 4);
        assert_eq!(chunks.chunk_count(), 0);
        assert!(chunks.next().is_none());
    }

    #[test]
    fn zero_chunk_kb_is_one_chunk() {
        let data: Vec<u8> = (0..10_000u32).map(|i| i as u8).collect();
        let chunks: Vec<Bytes> = chunk_bytes_kb(data.clone(), 0).collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].as_ref(), data.as_slice());
    }

    #[test]
    fn restart_replays_from_first_chunk() {
        let mut chunks = Chunks::new(Bytes::from(vec![3u8; 10]), 4);
        let first: Vec<Bytes> = chunks.by_ref().collect();
        assert!(chunks.next().is_none());

        chunks.restart();
        let second: Vec<Bytes> = chunks.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn size_hint_matches_count() {
        let chunks = Chunks::new(Bytes::from(vec![0u8; 9000]), 4096);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.chunk_count(), 3);
    }

    proptest! {
        #[test]
        fn prop_concat_reproduces_input(data in proptest::collection::vec(any::<u8>(), 0..20_000), chunk in 1usize..5000) {
            let chunks: Vec<Bytes> = Chunks::new(Bytes::from(data.clone()), chunk).collect();
            let joined: Vec<u8> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
            prop_assert_eq!(&joined, &data);
            prop_assert_eq!(chunks.len(), data.len().div_ceil(chunk));
        }

        #[test]
        fn prop_chunks_are_bounded(len in 1usize..20_000, chunk in 1usize..5000) {
            let chunks: Vec<Bytes> = Chunks::new(Bytes::from(vec![0u8; len]), chunk).collect();
            let (last, rest) = chunks.split_last().unwrap();
            prop_assert!(rest.iter().all(|c| c.len() == chunk));
            let expected_last = if len % chunk == 0 { chunk } else { len % chunk };
            prop_assert_eq!(last.len(), expected_last);
        }
    }
}
