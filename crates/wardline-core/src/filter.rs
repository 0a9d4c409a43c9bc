// ── Site filter ──
//
// Pure partitioning of flat collections by owning site, for screens that
// hold mixed-site data without a store round-trip.

use crate::model::{SiteId, SiteTagged};

impl<T: SiteTagged> SiteTagged for &T {
    fn site_id(&self) -> &SiteId {
        (**self).site_id()
    }
}

/// Keep the items belonging to `active`, preserving their input order.
///
/// Fails closed: with no active site the result is empty -- returning
/// everything would leak records across tenants.
pub fn filter_by_site<'a, T: SiteTagged>(
    active: Option<&SiteId>,
    items: &'a [T],
) -> Vec<&'a T> {
    let Some(site) = active else {
        return Vec::new();
    };
    items.iter().filter(|item| item.site_id() == site).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    struct Tagged {
        site_id: SiteId,
        label: &'static str,
    }

    impl SiteTagged for Tagged {
        fn site_id(&self) -> &SiteId {
            &self.site_id
        }
    }

    fn tagged(site: &str, label: &'static str) -> Tagged {
        Tagged {
            site_id: SiteId::from(site),
            label,
        }
    }

    #[test]
    fn no_active_site_fails_closed() {
        let items = vec![tagged("a", "one"), tagged("b", "two")];
        assert!(filter_by_site(None, &items).is_empty());
    }

    #[test]
    fn keeps_only_matching_items_in_order() {
        let items = vec![
            tagged("a", "first"),
            tagged("b", "other"),
            tagged("a", "second"),
            tagged("a", "third"),
        ];
        let site = SiteId::from("a");

        let filtered = filter_by_site(Some(&site), &items);
        let labels: Vec<&str> = filtered.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn filtering_twice_equals_filtering_once() {
        let items = vec![tagged("a", "one"), tagged("b", "two"), tagged("a", "three")];
        let site = SiteId::from("a");

        let once = filter_by_site(Some(&site), &items);
        let twice = filter_by_site(Some(&site), &once);
        let once_labels: Vec<&str> = once.iter().map(|t| t.label).collect();
        let twice_labels: Vec<&str> = twice.iter().map(|t| t.label).collect();
        assert_eq!(once_labels, twice_labels);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let site = SiteId::from("a");
        let items: Vec<Tagged> = Vec::new();
        assert!(filter_by_site(Some(&site), &items).is_empty());
    }
}
