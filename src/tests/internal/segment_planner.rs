//! 分段规划测试。

use proptest::prelude::*;

use crate::FetchError;
use crate::bytes_unit::{kibi_bytes, mebi_bytes};
use crate::ranges::{ByteRange, choose_segment_size, plan_ranges, redundant_byte_count};

#[test]
fn segment_size_picks_largest_threshold() {
    assert_eq!(choose_segment_size(mebi_bytes(2)), mebi_bytes(1));
    assert_eq!(choose_segment_size(mebi_bytes(1)), mebi_bytes(1));
    assert_eq!(choose_segment_size(mebi_bytes(1) - 1), kibi_bytes(500));
    assert_eq!(choose_segment_size(kibi_bytes(100)), kibi_bytes(100));
    assert_eq!(choose_segment_size(kibi_bytes(60)), kibi_bytes(50));
    assert_eq!(choose_segment_size(kibi_bytes(10)), kibi_bytes(10));
}

#[test]
fn segment_size_falls_back_to_content_length() {
    assert_eq!(choose_segment_size(kibi_bytes(10) - 1), kibi_bytes(10) - 1);
    assert_eq!(choose_segment_size(32), 32);
    assert_eq!(choose_segment_size(1), 1);
}

#[test]
fn redundant_is_zero_when_segment_fits() {
    assert_eq!(redundant_byte_count(100, 10, 0).unwrap(), 0);
    assert_eq!(redundant_byte_count(100, 10, 90).unwrap(), 0);
}

#[test]
fn redundant_counts_overhang() {
    assert_eq!(redundant_byte_count(100, 10, 95).unwrap(), 5);
    assert_eq!(redundant_byte_count(100, 100, 99).unwrap(), 99);
}

#[test]
fn redundant_rejects_bad_arguments() {
    assert!(matches!(
        redundant_byte_count(10, 11, 0),
        Err(FetchError::Precondition(_))
    ));
    assert!(matches!(
        redundant_byte_count(10, 5, 10),
        Err(FetchError::Precondition(_))
    ));
}

#[test]
fn plans_two_mebibyte_resource_after_probe() {
    let total = mebi_bytes(2);
    let ranges: Vec<ByteRange> = plan_ranges(total, mebi_bytes(1), kibi_bytes(1))
        .unwrap()
        .collect();

    assert_eq!(
        ranges,
        vec![
            ByteRange::new(kibi_bytes(1), kibi_bytes(1) + mebi_bytes(1) - 1, 0),
            ByteRange::new(mebi_bytes(1), mebi_bytes(2) - 1, kibi_bytes(1)),
        ]
    );
}

#[test]
fn plans_exact_multiple_without_overlap() {
    let ranges: Vec<ByteRange> = plan_ranges(40, 10, 0).unwrap().collect();
    assert_eq!(ranges.len(), 4);
    assert!(ranges.iter().all(|r| r.redundant == 0 && r.len() == 10));
}

#[test]
fn plan_rejects_bad_arguments() {
    assert!(matches!(plan_ranges(10, 5, 10), Err(FetchError::Precondition(_))));
    assert!(matches!(plan_ranges(10, 11, 0), Err(FetchError::Precondition(_))));
    assert!(matches!(plan_ranges(10, 0, 0), Err(FetchError::Precondition(_))));
}

proptest! {
    #[test]
    fn ranges_tile_without_gap_or_overlap(
        content_length in 1u64..200_000,
        size_seed in any::<u64>(),
        start_seed in any::<u64>(),
    ) {
        let segment_size = 1 + size_seed % content_length;
        let start_index = start_seed % content_length;

        let mut cursor = start_index;
        for range in plan_ranges(content_length, segment_size, start_index).unwrap() {
            prop_assert_eq!(range.len(), segment_size);
            prop_assert!(range.end < content_length);
            prop_assert!(range.redundant <= range.len());
            prop_assert_eq!(range.effective_start(), cursor);
            cursor = range.end + 1;
        }
        prop_assert_eq!(cursor, content_length);
    }

    #[test]
    fn segment_size_never_exceeds_length(content_length in 1u64..(mebi_bytes(8))) {
        let size = choose_segment_size(content_length);
        prop_assert!(size <= content_length);
        prop_assert!(size > 0);
    }
}
