//! Temporal filter: which products fall inside an expiry horizon.

use chrono::{DateTime, Utc};

use assettrack_inventory::Product;

use crate::expiry::{horizon_threshold, warranty_expiry};

/// Products whose warranty expiry falls on or before `now + horizon_months`.
///
/// There is no lower bound: already-expired products are always included
/// ("expiring or already expired on or before the horizon"). The result is
/// ordered by `date_of_purchase` descending, most recently purchased first.
pub fn expiring_within(
    products: Vec<Product>,
    horizon_months: u32,
    now: DateTime<Utc>,
) -> Vec<Product> {
    let threshold = horizon_threshold(now, horizon_months);

    let mut selected: Vec<Product> = products
        .into_iter()
        .filter(|p| warranty_expiry(p.date_of_purchase, p.warranty_months) <= threshold)
        .collect();

    selected.sort_by(|a, b| b.date_of_purchase.cmp(&a.date_of_purchase));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use assettrack_core::{CompanyId, ProductId, UserId};
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
    }

    fn product(purchased: DateTime<Utc>, warranty_months: u32) -> Product {
        Product::new(
            ProductId::new(),
            "asset",
            purchased,
            warranty_months,
            UserId::new(),
            CompanyId::new(),
            purchased,
        )
        .unwrap()
    }

    #[test]
    fn zero_horizon_keeps_only_already_expired_products() {
        let now = at(2024, 3, 1);
        // Expired long ago vs. expiring 40 days out (2 months warranty bought
        // 20 days ago = 60 - 20 days remaining).
        let expired = product(at(2020, 1, 1), 1);
        let upcoming = product(now - Duration::days(20), 2);
        let expired_id = expired.id;

        let selected = expiring_within(vec![upcoming, expired], 0, now);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, expired_id);
    }

    #[test]
    fn horizon_includes_products_expiring_inside_it() {
        let now = at(2024, 3, 1);
        let upcoming = product(now - Duration::days(20), 2); // expires in 40 days
        let selected = expiring_within(vec![upcoming], 2, now);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn expiry_exactly_on_threshold_is_included() {
        let now = at(2024, 3, 1);
        // Purchased now with a 3-month warranty: expiry == now + 3 months.
        let boundary = product(now, 3);
        let selected = expiring_within(vec![boundary], 3, now);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn results_sorted_by_purchase_date_descending() {
        let now = at(2024, 3, 1);
        let older = product(at(2019, 5, 1), 0);
        let newer = product(at(2021, 8, 1), 0);
        let oldest = product(at(2018, 2, 1), 0);

        let selected = expiring_within(vec![older.clone(), newer.clone(), oldest.clone()], 0, now);

        let dates: Vec<_> = selected.iter().map(|p| p.date_of_purchase).collect();
        assert_eq!(
            dates,
            vec![newer.date_of_purchase, older.date_of_purchase, oldest.date_of_purchase]
        );
    }

    proptest! {
        // A larger horizon never excludes an item a smaller one included.
        #[test]
        fn widening_the_horizon_only_adds_products(
            purchases in prop::collection::vec((0i64..4_000_000_000i64, 0u32..200), 0..40),
            months1 in 0u32..60,
            extra in 0u32..60,
        ) {
            let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
            let products: Vec<Product> = purchases
                .into_iter()
                .map(|(secs, warranty)| {
                    product(DateTime::<Utc>::from_timestamp(secs, 0).unwrap(), warranty)
                })
                .collect();

            let narrow = expiring_within(products.clone(), months1, now);
            let wide = expiring_within(products, months1 + extra, now);

            for p in &narrow {
                prop_assert!(wide.iter().any(|q| q.id == p.id));
            }
        }

        #[test]
        fn output_is_always_sorted_descending(
            purchases in prop::collection::vec((0i64..4_000_000_000i64, 0u32..200), 0..40),
            months in 0u32..60,
        ) {
            let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
            let products: Vec<Product> = purchases
                .into_iter()
                .map(|(secs, warranty)| {
                    product(DateTime::<Utc>::from_timestamp(secs, 0).unwrap(), warranty)
                })
                .collect();

            let selected = expiring_within(products, months, now);
            for pair in selected.windows(2) {
                prop_assert!(pair[0].date_of_purchase >= pair[1].date_of_purchase);
            }
        }
    }
}
