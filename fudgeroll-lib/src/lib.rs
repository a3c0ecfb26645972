pub mod dice;
pub mod error;
mod evaluator;
pub mod model;
mod parser;
pub mod roll;
pub mod solver;

/// Solve `token` if it is a dice expression
///
/// `Ok(None)` means the token is plain text. Never panics, whatever the input.
pub fn parse_dice_expression(token: &str) -> error::Result<Option<roll::Result>> {
    solver::Solver::new(token).solve()
}

#[cfg(test)]
mod tests {
    use crate::dice::DieType;
    use crate::error::Error;
    use crate::model::Expression;
    use crate::roll::Kind;
    use crate::roll::Sign;
    use crate::roll::Source;
    use crate::solver::Options;
    use crate::solver::Solver;

    pub struct MockIter<T: Iterator<Item = i64>> {
        pub iter: T,
    }

    impl<T: Iterator<Item = i64>> Source for MockIter<T> {
        fn throw(&mut self, min: i64, max: i64) -> i64 {
            match self.iter.next() {
                Some(value) => {
                    if value < min || value > max {
                        panic!("Tried to return {} for a {}..={} range", value, min, max)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    fn mock(values: Vec<i64>) -> MockIter<std::vec::IntoIter<i64>> {
        MockIter {
            iter: values.into_iter(),
        }
    }

    #[test]
    fn face_count_and_range_test() {
        for die in [DieType::F, DieType::R, DieType::T] {
            for n in 1..=30 {
                let token = format!("{}{}", n, die);
                let res = crate::parse_dice_expression(&token).unwrap().unwrap();
                let chain = res.as_chain().unwrap();
                assert_eq!(1, chain.len());
                let outcome = &chain[0];
                let rolls = outcome.get_rolls();
                assert_eq!(n, rolls.len());
                assert!(rolls.iter().all(|r| (die.min()..=die.max()).contains(r)));
                assert_eq!(rolls.iter().sum::<i64>(), outcome.get_sum());
                assert_eq!(outcome.get_sum(), chain.get_total());
            }
        }
    }

    #[test]
    fn batch_test() {
        let r = Solver::new("3#1f");
        let res = r.solve_with_source(&mut mock(vec![1, 12, 7])).unwrap().unwrap();
        match res.get_result() {
            Kind::Chain(_) => unreachable!(),
            Kind::Batch(batch) => {
                assert_eq!(3, batch.len());
                let totals: Vec<_> = batch.iter().map(|o| o.get_total()).collect();
                assert_eq!(vec![-5, 6, 1], totals);
                assert!(batch.iter().all(|o| o.get_source() == "1f"));
                assert!(batch.iter().all(|o| o.get_rolls().len() == 1));
            }
        }
        assert_eq!("3#1f", res.get_query());
        eprintln!("{}", res);
    }

    #[test]
    fn batch_with_chain_test() {
        assert!(matches!(
            Solver::new("3#1f+2f").solve(),
            Err(Error::MalformedExpression { .. })
        ));
        assert!(matches!(
            crate::parse_dice_expression("1f+3#1f"),
            Err(Error::MalformedExpression { .. })
        ));
    }

    #[test]
    fn chain_add_test() {
        let r = Solver::new("2f+1r");
        let res = r.solve_with_source(&mut mock(vec![7, 8, 18])).unwrap().unwrap();
        let chain = res.as_chain().unwrap();
        assert_eq!(2, chain.len());
        assert_eq!(Sign::Plus, chain[0].get_sign());
        assert_eq!(Sign::Plus, chain[1].get_sign());
        assert_eq!("2f", chain[0].get_source());
        assert_eq!("1r", chain[1].get_source());
        assert_eq!(3, chain[0].get_sum());
        assert_eq!(9, chain[1].get_sum());
        assert_eq!(12, chain.get_total());
        assert_eq!("`2f+1r` `[1, 2] + [9]` = **12**", res.to_string());
    }

    #[test]
    fn chain_sub_test() {
        let r = Solver::new("2f-1r");
        let res = r.solve_with_source(&mut mock(vec![7, 8, 1])).unwrap().unwrap();
        let chain = res.as_chain().unwrap();
        assert_eq!(Sign::Minus, chain[1].get_sign());
        assert_eq!(-8, chain[1].get_sum());
        assert_eq!(3 - -8, chain.get_total());
    }

    #[test]
    fn static_modifier_test() {
        let r = Solver::new("2f+3-1t");
        let res = r.solve_with_source(&mut mock(vec![6, 6, 24])).unwrap().unwrap();
        let chain = res.as_chain().unwrap();
        assert_eq!(2, chain.len());
        assert_eq!(Some(3), chain[0].get_modifier());
        assert_eq!(0, chain[0].get_sum());
        assert_eq!(3, chain[0].get_total());
        assert_eq!(3 - 12, chain.get_total());
    }

    #[test]
    fn not_dice_test() {
        for token in ["hello", "", "f", "2d6", "2fx", "2f+3x", "#1f", "kh2"] {
            assert!(
                matches!(crate::parse_dice_expression(token), Ok(None)),
                "{}",
                token
            );
        }
    }

    #[test]
    fn trailing_sign_test() {
        assert!(matches!(
            Solver::new("2f+").solve(),
            Err(Error::MalformedExpression { .. })
        ));
        assert!(matches!(
            Solver::new("2f+1r-").solve(),
            Err(Error::MalformedExpression { .. })
        ));
    }

    #[test]
    fn keep_high_test() {
        let r = Solver::new("4fkh2");
        let res = r
            .solve_with_source(&mut mock(vec![1, 12, 6, 9]))
            .unwrap()
            .unwrap();
        let outcome = &res.as_chain().unwrap()[0];
        assert_eq!(vec![-5, 0, 3, 6], outcome.get_rolls());
        assert_eq!(vec![3, 6], outcome.get_kept());
        assert_eq!(9, outcome.get_sum());
        assert_eq!("[~~-5~~, ~~0~~, 3, 6]", outcome.to_string_history());
    }

    #[test]
    fn keep_low_test() {
        let r = Solver::new("3rkl1+2");
        let res = r
            .solve_with_source(&mut mock(vec![18, 1, 10]))
            .unwrap()
            .unwrap();
        let outcome = &res.as_chain().unwrap()[0];
        assert_eq!(vec![-8], outcome.get_kept());
        assert_eq!(-6, outcome.get_total());
    }

    #[test]
    fn keep_exceeds_amount_test() {
        assert!(matches!(
            Solver::new("2fkh3").solve(),
            Err(Error::InvalidSpec(_))
        ));
    }

    #[test]
    fn parse_is_stable_test() {
        let r = Solver::new("2fkh1+3-1r+10t");
        let first = r.parse().unwrap().unwrap();
        for _ in 0..10 {
            assert_eq!(first, r.parse().unwrap().unwrap());
        }
        match first {
            Expression::Chain(links) => assert_eq!(3, links.len()),
            Expression::Batch { .. } => unreachable!(),
        }
    }

    #[test]
    fn uppercase_test() {
        let res = crate::parse_dice_expression("2F-1R").unwrap().unwrap();
        assert_eq!("2f-1r", res.get_query());
        assert_eq!(2, res.outcomes().len());
    }

    #[test]
    fn multi_digit_count_test() {
        let res = Solver::new("12t").solve().unwrap().unwrap();
        assert_eq!(12, res.outcomes()[0].get_rolls().len());
    }

    #[test]
    fn single_digit_option_test() {
        let options = Options {
            single_digit_count: true,
            ..Options::default()
        };
        assert!(matches!(
            Solver::new("12f").with_options(options).solve(),
            Ok(None)
        ));
        assert!(matches!(
            Solver::new("1f+12f").with_options(options).solve(),
            Err(Error::MalformedExpression { .. })
        ));
        assert!(matches!(
            Solver::new("9f").with_options(options).solve(),
            Ok(Some(_))
        ));
    }

    #[test]
    fn max_terms_test() {
        let options = Options {
            max_terms: 2,
            ..Options::default()
        };
        assert!(Solver::new("1f+1f").with_options(options).solve().is_ok());
        assert!(matches!(
            Solver::new("1f+1f+1f").with_options(options).solve(),
            Err(Error::MalformedExpression { .. })
        ));

        let long = vec!["1f"; 100].join("+");
        assert!(matches!(
            Solver::new(&long).solve(),
            Err(Error::MalformedExpression { .. })
        ));
    }

    #[test]
    fn never_panics_test() {
        for token in [
            "+", "-", "#", "1#", "1#f", "99999999999999999999999f", "1f+-1f", "1f++", "1fkh",
            "1fkh99999999999999999999", "3#", "é1f", "1fé", "1f+é", "0#0f", "1f-0",
        ] {
            let _ = crate::parse_dice_expression(token);
        }
    }

    #[test]
    fn solve_with_rng_test() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let r = Solver::new("5#3tkl2-1");
        let a = r.solve_with(&mut StdRng::seed_from_u64(7)).unwrap().unwrap();
        let b = r.solve_with(&mut StdRng::seed_from_u64(7)).unwrap().unwrap();
        let totals = |res: &crate::roll::Result| {
            res.outcomes().iter().map(|o| o.get_total()).collect::<Vec<_>>()
        };
        assert_eq!(5, a.as_batch().unwrap().len());
        assert_eq!(totals(&a), totals(&b));
    }
}
