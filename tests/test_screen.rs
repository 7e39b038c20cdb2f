//! Tests for the screen and monitor use cases over a stub snapshot source.

mod common;

use common::{make_position, make_row, StubSource};
use proverbs::domain::ports::profile_repository::ProfileRepository;
use proverbs::domain::values::profile::ScreenProfile;
use proverbs::domain::values::sort_spec::{Direction, SortKey};
use proverbs::infrastructure::sqlite::migrations::run_migrations;
use proverbs::infrastructure::sqlite::profile_repo::SqliteProfileRepo;
use proverbs::Proverbs;
use std::sync::Arc;

fn setup(source: StubSource) -> Proverbs {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    let profiles: Arc<dyn ProfileRepository> = Arc::new(SqliteProfileRepo::new(conn));
    Proverbs::with_providers(Arc::new(source), profiles)
}

#[tokio::test]
async fn test_screen_empty_snapshot() {
    let pv = setup(StubSource::new(vec![], vec![]));
    let result = pv.screen(&ScreenProfile::default(), None).await.unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.shown, 0);
    assert!(result.rows.is_empty());
}

#[tokio::test]
async fn test_screen_reports_total_and_shown() {
    let mut cheap = make_row("CHEAP");
    cheap.price = 10.0;
    let mut pricey = make_row("PRICEY");
    pricey.price = 5000.0;

    let pv = setup(StubSource::new(vec![cheap, pricey], vec![]));
    let mut profile = ScreenProfile::default();
    profile.criteria.price_max = 1000.0;

    let result = pv.screen(&profile, None).await.unwrap();
    assert_eq!(result.total, 2);
    assert_eq!(result.shown, 1);
    assert_eq!(result.rows[0].row.symbol, "CHEAP");
    assert_eq!(result.last_updated.as_deref(), Some("2024-05-01T12:00:00Z"));
}

#[tokio::test]
async fn test_screen_orders_by_weighted_score_by_default() {
    let mut low = make_row("LOW");
    low.fundamentals_score = 1.0;
    low.technicals_score = 1.0;
    low.liquidity_score = 1.0;
    let mut high = make_row("HIGH");
    high.fundamentals_score = 5.0;
    high.technicals_score = 5.0;
    high.liquidity_score = 5.0;

    let pv = setup(StubSource::new(vec![low, high], vec![]));
    let result = pv.screen(&ScreenProfile::default(), None).await.unwrap();
    let symbols: Vec<_> = result.rows.iter().map(|s| s.row.symbol.as_str()).collect();
    assert_eq!(symbols, ["HIGH", "LOW"]);
}

#[tokio::test]
async fn test_exclusion_set_comes_from_monitor() {
    let rows = vec![make_row("AAPL"), make_row("MSFT"), make_row("GOOG")];
    let positions = vec![make_position("AAPL"), make_position("GOOG")];
    let pv = setup(StubSource::new(rows, positions));

    let mut profile = ScreenProfile::default();
    profile.criteria.exclude_held = true;

    let result = pv.screen(&profile, None).await.unwrap();
    let symbols: Vec<_> = result.rows.iter().map(|s| s.row.symbol.as_str()).collect();
    assert_eq!(symbols, ["MSFT"]);
}

#[tokio::test]
async fn test_held_symbols_pass_through_when_toggle_off() {
    let rows = vec![make_row("AAPL"), make_row("MSFT")];
    let positions = vec![make_position("AAPL")];
    let pv = setup(StubSource::new(rows, positions));

    let result = pv.screen(&ScreenProfile::default(), None).await.unwrap();
    assert_eq!(result.shown, 2);
}

#[tokio::test]
async fn test_screen_limit_truncates_after_ordering() {
    let rows: Vec<_> = (0..10)
        .map(|i| {
            let mut row = make_row(&format!("S{i}"));
            row.fundamentals_score = f64::from(i) / 2.0;
            row.technicals_score = f64::from(i) / 2.0;
            row.liquidity_score = f64::from(i) / 2.0;
            row
        })
        .collect();
    let pv = setup(StubSource::new(rows, vec![]));

    let result = pv.screen(&ScreenProfile::default(), Some(3)).await.unwrap();
    assert_eq!(result.total, 10);
    assert_eq!(result.shown, 3);
    assert_eq!(result.rows[0].row.symbol, "S9");
}

#[tokio::test]
async fn test_screen_with_explicit_sort() {
    let mut a = make_row("A");
    a.price = 300.0;
    let mut b = make_row("B");
    b.price = 100.0;
    let mut c = make_row("C");
    c.price = 200.0;
    let pv = setup(StubSource::new(vec![a, b, c], vec![]));

    let mut profile = ScreenProfile::default();
    profile.sort.key = SortKey::Price;
    profile.sort.direction = Direction::Asc;

    let result = pv.screen(&profile, None).await.unwrap();
    let prices: Vec<_> = result.rows.iter().map(|s| s.row.price as i64).collect();
    assert_eq!(prices, [100, 200, 300]);
}

#[tokio::test]
async fn test_monitor_lists_positions_and_symbols() {
    let positions = vec![make_position("F"), make_position("T")];
    let pv = setup(StubSource::new(vec![], positions));

    let snapshot = pv.monitor().await.unwrap();
    assert_eq!(snapshot.positions.len(), 2);

    let symbols = pv.held_symbols().await.unwrap();
    assert_eq!(symbols, ["F", "T"]);
}

#[tokio::test]
async fn test_metadata_passthrough() {
    let pv = setup(StubSource::new(vec![], vec![]));
    let metadata = pv.metadata().await.unwrap();
    assert_eq!(metadata.expiry.as_deref(), Some("2024-05-17"));
    assert!((metadata.ror - 0.01).abs() < 1e-9);
}
