use agm_belief::{oracle, parse, structures::formula::Formula};

fn formulas(statements: &[&str]) -> Vec<Formula> {
    statements
        .iter()
        .map(|statement| parse::formula(statement).unwrap().cnf())
        .collect()
}

mod oracle_properties {
    use super::*;

    #[test]
    fn an_empty_sequence_is_consistent() {
        assert!(oracle::consistent(&[]));
    }

    #[test]
    fn the_verdict_is_independent_of_order() {
        let beliefs = formulas(&["A", "A >> B", "~B"]);

        let expected = oracle::consistent(&beliefs);

        let permutations: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        for permutation in permutations {
            let permuted: Vec<Formula> = permutation
                .into_iter()
                .map(|index| beliefs[index].clone())
                .collect();
            assert_eq!(oracle::consistent(&permuted), expected);
        }
    }

    #[test]
    fn complementary_beliefs_are_inconsistent_in_any_order() {
        let beliefs = formulas(&["A", "~A"]);

        assert!(!oracle::consistent(&beliefs));

        let reversed: Vec<Formula> = beliefs.into_iter().rev().collect();
        assert!(!oracle::consistent(&reversed));
    }

    #[test]
    fn a_lone_contradiction_is_inconsistent() {
        assert!(!oracle::consistent(&formulas(&["A & ~A"])));
    }

    #[test]
    fn a_lone_tautology_is_consistent() {
        assert!(oracle::consistent(&formulas(&["A | ~A"])));
    }

    #[test]
    fn an_implication_chain_propagates_to_a_conflict() {
        let beliefs = formulas(&["A", "A >> B", "B >> C", "~C"]);
        assert!(!oracle::consistent(&beliefs));
    }

    #[test]
    fn a_base_and_its_conjunction_share_a_verdict() {
        for statements in [
            ["A >> B", "~B", "A | C"].as_slice(),
            ["A", "A >> B", "~B"].as_slice(),
        ] {
            let beliefs = formulas(statements);
            let conjunction = Formula::conjoin(beliefs.clone()).unwrap();

            assert_eq!(
                oracle::consistent(&beliefs),
                oracle::consistent(std::slice::from_ref(&conjunction)),
            );
        }
    }
}
