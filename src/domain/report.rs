//! Lifetime summary over the shipment collection

use serde::Serialize;

use super::{Shipment, ShipmentStatus};

/// Shipment counts per status and income from non-cancelled shipments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_shipments: usize,
    pub delivered: usize,
    pub in_transit: usize,
    pub pending: usize,
    pub cancelled: usize,

    /// Sum of `price_usd` over every shipment that is not cancelled
    pub total_income: f64,
}

impl Summary {
    /// Computes the summary in a single pass
    pub fn from_shipments(shipments: &[Shipment]) -> Self {
        let mut summary = Summary::default();
        for shipment in shipments {
            summary.total_shipments += 1;
            match shipment.status {
                ShipmentStatus::Pending => summary.pending += 1,
                ShipmentStatus::InTransit => summary.in_transit += 1,
                ShipmentStatus::Delivered => summary.delivered += 1,
                ShipmentStatus::Cancelled => summary.cancelled += 1,
            }
            if shipment.status.is_billable() {
                summary.total_income += shipment.price_usd;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(id: &str, status: ShipmentStatus, price: f64) -> Shipment {
        Shipment {
            id: id.into(),
            customer_id: "C1".into(),
            driver_id: "D1".into(),
            vehicle_id: "V1".into(),
            origin: "A".into(),
            destination: "B".into(),
            weight_kg: 1.0,
            price_usd: price,
            status,
            created_at: "2024-01-01 00:00:00".into(),
        }
    }

    #[test]
    fn empty_summary() {
        assert_eq!(Summary::from_shipments(&[]), Summary::default());
    }

    #[test]
    fn income_excludes_only_cancelled() {
        let shipments = vec![
            shipment("S1", ShipmentStatus::Pending, 100.0),
            shipment("S2", ShipmentStatus::Delivered, 200.0),
            shipment("S3", ShipmentStatus::Cancelled, 50.0),
        ];
        let summary = Summary::from_shipments(&shipments);
        assert_eq!(summary.total_shipments, 3);
        assert_eq!(summary.total_income, 300.0);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.delivered, 1);
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.in_transit, 0);
    }

    #[test]
    fn in_transit_counts_towards_income() {
        let shipments = vec![shipment("S1", ShipmentStatus::InTransit, 42.5)];
        let summary = Summary::from_shipments(&shipments);
        assert_eq!(summary.in_transit, 1);
        assert_eq!(summary.total_income, 42.5);
    }
}
