use super::*;

#[test]
fn stat_cards_order_and_values() {
    let overview = ResourceOverview {
        total_nodes: 3,
        total_vms: 12,
        running_vms: 9,
        active_alerts: 2,
        ..ResourceOverview::default()
    };
    let cards = stat_cards(Some(&overview));
    let summary: Vec<_> = cards.iter().map(|c| (c.title, c.value)).collect();
    assert_eq!(
        summary,
        vec![("Total Nodes", 3), ("Total VMs", 12), ("Running VMs", 9), ("Active Alerts", 2)]
    );
}

#[test]
fn stat_cards_default_to_zero() {
    assert!(stat_cards(None).iter().all(|c| c.value == 0));
}

#[test]
fn stat_cards_have_distinct_seeds() {
    let cards = stat_cards(None);
    for (i, card) in cards.iter().enumerate() {
        for other in &cards[i + 1..] {
            assert!((card.seed - other.seed).abs() > f64::EPSILON);
        }
    }
}
