#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::models::{
        Assignment, Customer, CustomerRef, Department, Financials, GarmentCategory, GarmentType,
        Item, Order, OrderFilter, OrderStatus,
    };

    fn create_test_order(id: u64, mobile: &str, items: Vec<Item>) -> Order {
        let financials = Financials::compute(&items, Decimal::ZERO, Decimal::ZERO).unwrap();
        Order {
            id,
            bill_no: format!("ST{id:06}"),
            customer: CustomerRef {
                name: format!("Customer {id}"),
                mobile: mobile.to_string(),
            },
            items,
            financials,
            bill_date: date(2024, 1, 15),
            delivery_date: Some(date(2024, 1, 22)),
            instructions: None,
            status: OrderStatus::Pending,
            assignment: None,
            completed_at: None,
            created_at: Timestamp::from_second(1705276800).unwrap(),
            updated_at: Timestamp::from_second(1705276800).unwrap(),
        }
    }

    #[test]
    fn test_order_status_round_trips_through_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_status_is_ordered_along_pipeline() {
        assert!(OrderStatus::Pending < OrderStatus::Cutting);
        assert!(OrderStatus::Ironing < OrderStatus::Completed);
        assert!(OrderStatus::Completed.is_terminal());
        assert!(!OrderStatus::Ironing.is_terminal());
    }

    #[test]
    fn test_department_parsing_accepts_aliases() {
        assert_eq!(
            "blouse-stitching".parse::<Department>().unwrap(),
            Department::BlouseStitching
        );
        assert_eq!(
            "dress_stitching".parse::<Department>().unwrap(),
            Department::DressStitching
        );
        assert_eq!("Ironing".parse::<Department>().unwrap(), Department::Ironing);
        assert!("stitching".parse::<Department>().is_err());
    }

    #[test]
    fn test_department_stage() {
        assert_eq!(Department::Cutting.stage(), OrderStatus::Cutting);
        assert_eq!(Department::BlouseStitching.stage(), OrderStatus::Stitching);
        assert_eq!(Department::DressStitching.stage(), OrderStatus::Stitching);
        assert_eq!(Department::Ironing.stage(), OrderStatus::Ironing);
    }

    #[test]
    fn test_garment_parse_is_case_insensitive() {
        assert_eq!(GarmentType::parse("saree"), Some(GarmentType::Saree));
        assert_eq!(GarmentType::parse(" Blouse "), Some(GarmentType::Blouse));
        assert_eq!(GarmentType::parse("Lehenga"), None);
        assert_eq!(GarmentType::parse(""), None);
    }

    #[test]
    fn test_garment_categories() {
        assert_eq!(GarmentType::Blouse.category(), GarmentCategory::Blouse);
        assert_eq!(GarmentType::Saree.category(), GarmentCategory::Saree);
        assert_eq!(GarmentType::Kurti.category(), GarmentCategory::Dress);
        assert_eq!(GarmentType::Jacket.category(), GarmentCategory::Dress);
        assert_eq!(GarmentType::Pant.category(), GarmentCategory::Dress);
    }

    #[test]
    fn test_measurement_templates() {
        assert!(GarmentType::Blouse.measurement_fields().contains(&"Front Neck"));
        assert_eq!(GarmentType::Salwar.measurement_fields(), &["Length", "Bottom"]);
        assert!(GarmentType::Saree.measurement_fields().is_empty());
    }

    #[test]
    fn test_financials_compute() {
        let items = vec![
            Item::new("Blouse", 2, dec!(450)),
            Item::new("Kurti", 1, dec!(799.50)),
        ];
        let money = Financials::compute(&items, dec!(200), dec!(500)).unwrap();

        assert_eq!(money.total_amount, dec!(1899.50));
        assert_eq!(money.balance, dec!(1399.50));
        assert!(money.is_consistent_with(&items));
    }

    #[test]
    fn test_financials_with_no_items_is_previous_balance() {
        let money = Financials::compute(&[], dec!(120), dec!(20)).unwrap();
        assert_eq!(money.total_amount, dec!(120));
        assert_eq!(money.balance, dec!(100));
    }

    #[test]
    fn test_order_recompute_after_item_edit() {
        let mut order = create_test_order(1, "9000000001", vec![Item::new("Blouse", 1, dec!(400))]);
        order.set_advance(dec!(100)).unwrap();
        assert_eq!(order.financials.balance, dec!(300));

        order.items[0].qty = 3;
        order.recompute_financials().unwrap();
        assert_eq!(order.financials.total_amount, dec!(1200));
        assert_eq!(
            order.financials.balance,
            order.financials.total_amount - order.financials.advance
        );
    }

    #[test]
    fn test_order_holder_helpers() {
        let mut order = create_test_order(1, "9000000001", vec![Item::new("Blouse", 1, dec!(400))]);
        assert!(!order.is_claimed());
        assert!(!order.is_held_by("w1"));

        order.assignment = Some(Assignment {
            worker_id: "w1".to_string(),
            worker_name: "Meena".to_string(),
            claimed_at: Timestamp::from_second(1705276800).unwrap(),
        });
        assert!(order.is_claimed());
        assert!(order.is_held_by("w1"));
        assert!(!order.is_held_by("w2"));
        assert_eq!(order.holder_name(), Some("Meena"));
    }

    #[test]
    fn test_order_json_uses_lowercase_status_and_skips_empty_fields() {
        let order = create_test_order(3, "9000000003", vec![Item::new("Saree", 1, dec!(150))]);
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["status"], "pending");
        assert!(json.get("assignment").is_none());
        assert!(json.get("completed_at").is_none());
        assert_eq!(json["bill_date"], "2024-01-15");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_order_filter_matches() {
        let mut order = create_test_order(1, "9000000001", vec![Item::new("Kurti", 1, dec!(600))]);
        order.status = OrderStatus::Cutting;

        assert!(OrderFilter::default().matches(&order));
        assert!(OrderFilter::with_status(OrderStatus::Cutting).matches(&order));
        assert!(!OrderFilter::with_status(OrderStatus::Ironing).matches(&order));

        let garment = OrderFilter {
            garment: Some(GarmentType::Blouse),
            ..Default::default()
        };
        assert!(!garment.matches(&order));

        let worker = OrderFilter {
            worker_id: Some("w1".to_string()),
            ..Default::default()
        };
        assert!(!worker.matches(&order));
    }

    #[test]
    fn test_order_filter_by_bill_date() {
        let mut order = create_test_order(1, "9000000001", vec![Item::new("Kurti", 1, dec!(600))]);
        order.bill_date = date(2024, 1, 15);

        let same_day = OrderFilter {
            bill_date: Some(date(2024, 1, 15)),
            ..Default::default()
        };
        assert!(same_day.matches(&order));

        let next_day = OrderFilter {
            bill_date: Some(date(2024, 1, 16)),
            ..Default::default()
        };
        assert!(!next_day.matches(&order));
    }

    #[test]
    fn test_customer_ledger_groups_by_mobile() {
        let mut first = create_test_order(1, "9000000001", vec![Item::new("Blouse", 1, dec!(400))]);
        first.set_advance(dec!(100)).unwrap();
        let other = create_test_order(2, "9000000002", vec![Item::new("Kurti", 1, dec!(700))]);
        let mut second = create_test_order(3, "9000000001", vec![Item::new("Pant", 1, dec!(500))]);
        second.customer.name = "Renamed".to_string();
        second.set_advance(dec!(500)).unwrap();

        let ledger = Customer::ledger(&[first, other, second]);
        assert_eq!(ledger.len(), 2);

        let repeat = &ledger[0];
        assert_eq!(repeat.mobile, "9000000001");
        assert_eq!(repeat.bills, vec![1, 3]);
        assert_eq!(repeat.name, "Renamed");
        assert_eq!(repeat.previous_balance, Decimal::ZERO);
    }

    #[test]
    fn test_customer_find_skips_blank_mobile() {
        let anonymous = create_test_order(1, "  ", vec![Item::new("Blouse", 1, dec!(400))]);
        assert!(Customer::ledger(std::slice::from_ref(&anonymous)).is_empty());
        assert!(Customer::find(&[anonymous], "").is_none());
    }
}
