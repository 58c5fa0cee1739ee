#[allow(clippy::module_inception)]
mod tests {
    use crate::ast::{Expr, Value};
    use crate::{OrderBy, Page, PageError, PageRequest, SortDir};

    #[test]
    fn test_and_opt_both_present() {
        let combined = Expr::and_opt(
            Some(Expr::eq("username", "member1")),
            Some(Expr::ge("age", 10i64)),
        );
        assert_eq!(
            combined,
            Some(Expr::And(
                Box::new(Expr::Eq(
                    "username".to_string(),
                    Value::String("member1".to_string())
                )),
                Box::new(Expr::Ge("age".to_string(), Value::Int(10))),
            ))
        );
    }

    #[test]
    fn test_and_opt_left_absent() {
        let right = Expr::le("age", 40i64);
        assert_eq!(
            Expr::and_opt(None, Some(right.clone())),
            Some(right),
            "an absent left operand must not poison the chain"
        );
    }

    #[test]
    fn test_and_opt_both_absent_is_match_everything() {
        assert_eq!(Expr::and_opt(None, None), None);
    }

    #[test]
    fn test_and_opt_fold_is_order_insensitive_in_field_set() {
        let parts = [
            Some(Expr::eq("username", "m")),
            None,
            Some(Expr::ge("age", 1i64)),
            Some(Expr::le("age", 9i64)),
        ];

        let folded = parts.into_iter().fold(None, Expr::and_opt).unwrap();
        let mut fields = Vec::new();
        folded.for_each_field(&mut |f| fields.push(f.to_string()));
        assert_eq!(fields, vec!["username", "age", "age"]);
    }

    #[test]
    fn test_page_request_rejects_zero_limit() {
        assert_eq!(PageRequest::new(0, 0), Err(PageError::ZeroLimit));
    }

    #[test]
    fn test_page_request_validate_literal() {
        let req = PageRequest {
            offset: 5,
            limit: 0,
            order: OrderBy::default(),
        };
        assert_eq!(req.validate(), Err(PageError::ZeroLimit));
    }

    #[test]
    fn test_page_echoes_offset_and_limit() {
        let req = PageRequest::new(8, 4).unwrap();
        let page = Page::new(vec![1, 2], &req, 10);
        assert_eq!(page.offset, 8);
        assert_eq!(page.limit, 4);
        assert_eq!(page.total, 10);
        assert!(page.is_last());
    }

    #[test]
    fn test_page_map_items_preserves_envelope() {
        let req = PageRequest::new(0, 10).unwrap();
        let page = Page::new(vec![1, 2, 3], &req, 3).map_items(|n| n.to_string());
        assert_eq!(page.items, vec!["1", "2", "3"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_order_by_ensure_tiebreaker() {
        let order = OrderBy::desc("age").ensure_tiebreaker("member_id", SortDir::Asc);
        assert_eq!(order.0.len(), 2);
        assert_eq!(order.0[1].field, "member_id");
        assert_eq!(order.0[1].dir, SortDir::Asc);
    }

    #[test]
    fn test_order_by_ensure_tiebreaker_already_present() {
        let order = OrderBy::desc("member_id").ensure_tiebreaker("member_id", SortDir::Asc);
        assert_eq!(order.0.len(), 1);
        assert_eq!(order.0[0].dir, SortDir::Desc);
    }

    #[test]
    fn test_order_serde_round_trip() {
        let order = OrderBy::asc("age").then_desc("member_id");
        let json = serde_json::to_string(&order).unwrap();
        let back: OrderBy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
