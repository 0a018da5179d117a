use praise_core::record::{PraiseRecord, RawRecord};
use praise_core::selection::top_k;
use praise_core::store::{MemoryRepository, PraiseRepository};

fn make_record(id: i64, count: u64) -> PraiseRecord {
    PraiseRecord::validate(RawRecord {
        id,
        title: format!("Praise {id}"),
        template: "Well met, {name}.".to_string(),
        thank_count: count as i64,
    })
    .unwrap()
}

#[test]
fn invariant_bounded_and_non_increasing() {
    let counts = [3u64, 9, 1, 9, 0, 14, 2, 7, 7, 7, 5, 0, 11, 4, 6];
    let records: Vec<_> = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| make_record(i as i64 + 1, c))
        .collect();

    let top = top_k(records, 10);

    assert!(top.len() <= 10);
    assert!(top
        .windows(2)
        .all(|w| w[0].thank_count >= w[1].thank_count));
}

#[test]
fn golden_tie_break_is_ascending_id() {
    let records = vec![make_record(1, 0), make_record(2, 5), make_record(3, 5)];

    let top = top_k(records, 2);

    let ids: Vec<i64> = top.iter().map(|r| r.id.as_i64()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn tie_break_holds_regardless_of_input_order() {
    let records = vec![make_record(3, 5), make_record(1, 0), make_record(2, 5)];

    let top = top_k(records, 3);

    let ids: Vec<i64> = top.iter().map(|r| r.id.as_i64()).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn short_sets_and_zero_k_are_fine() {
    assert!(top_k(vec![], 10).is_empty());
    assert!(top_k(vec![make_record(1, 4)], 0).is_empty());

    let top = top_k(vec![make_record(1, 4)], 10);
    assert_eq!(top.len(), 1);
}

#[tokio::test]
async fn repository_view_is_bounded_to_the_limit() {
    let records: Vec<_> = (1..=14).map(|id| make_record(id, id as u64 % 5)).collect();
    let repo = MemoryRepository::seeded(records).unwrap();

    let top = repo.top_by_thanks(10).await.unwrap();

    assert_eq!(top.len(), 10);
    assert!(top
        .windows(2)
        .all(|w| w[0].thank_count >= w[1].thank_count));
}
