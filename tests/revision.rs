use agm_belief::{
    base::{BeliefBase, ReviseOk},
    config::{Config, UnsatisfiablePolicy},
    context::Context,
    structures::formula::Formula,
    types::err::{ErrorKind, RevisionError},
};

mod revision {
    use super::*;

    #[test]
    fn a_satisfiable_belief_is_always_held_after_revision() {
        let mut the_context = Context::from_config(Config::default());

        for statement in ["A", "A >> B", "~B", "C | ~A"] {
            assert!(the_context.revise(statement).is_ok());
            assert!(the_context.is_consistent());

            let last = the_context.current_base().last().map(|(r, _)| r.clone());
            assert_eq!(
                last,
                Some(agm_belief::parse::formula(statement).unwrap().cnf().to_string())
            );
        }
    }

    #[test]
    fn revision_grows_the_base_by_at_most_one() {
        let mut the_context = Context::from_config(Config::default());

        for statement in ["A", "B", "A >> C", "~C", "~A"] {
            let before = the_context.base.len();
            assert!(the_context.revise(statement).is_ok());
            assert!(the_context.base.len() <= before + 1);
        }
    }

    #[test]
    fn evictions_come_from_the_front_in_order() {
        let mut base = BeliefBase::new();

        base.revise(Formula::Atom('A'));
        base.revise(Formula::Atom('B'));

        let contradiction = Formula::and(
            Formula::not(Formula::Atom('A')),
            Formula::not(Formula::Atom('B')),
        );

        assert_eq!(
            base.revise(contradiction.clone()),
            ReviseOk::Evicted(vec![Formula::Atom('A'), Formula::Atom('B')])
        );
        assert_eq!(base.beliefs(), &[contradiction]);
        assert!(base.is_consistent());
    }

    #[test]
    fn a_duplicate_belief_is_silently_ignored() {
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(the_context.revise("A"), Ok(ReviseOk::Added));
        assert_eq!(the_context.revise("A"), Ok(ReviseOk::Duplicate));
        assert_eq!(the_context.base.len(), 1);

        // Duplication is of formulas, not strings.
        assert_eq!(the_context.revise("A>>B"), Ok(ReviseOk::Added));
        assert_eq!(the_context.revise("A >> B"), Ok(ReviseOk::Duplicate));
        assert_eq!(the_context.base.len(), 2);
    }

    #[test]
    fn an_unsatisfiable_belief_is_rejected_by_default() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.revise("A").is_ok());

        assert_eq!(
            the_context.revise("A & ~A"),
            Err(ErrorKind::Revision(RevisionError::Unsatisfiable))
        );
        assert_eq!(the_context.base.len(), 1);
        assert!(the_context.is_consistent());
    }

    #[test]
    fn an_admitted_unsatisfiable_belief_empties_the_base() {
        let config = Config {
            unsatisfiable: UnsatisfiablePolicy::Admit,
        };
        let mut the_context = Context::from_config(config);

        assert!(the_context.revise("A").is_ok());
        assert!(the_context.revise("B").is_ok());

        match the_context.revise("A & ~A") {
            Ok(ReviseOk::Evicted(evicted)) => assert_eq!(evicted.len(), 3),
            other => panic!("unexpected revision outcome: {other:?}"),
        }

        assert!(the_context.base.is_empty());
        assert!(the_context.is_consistent());
    }

    #[test]
    fn a_parse_failure_leaves_the_base_unchanged() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.revise("A").is_ok());

        for statement in ["", "   ", "A &&", "A >", "@", "AB"] {
            assert!(matches!(
                the_context.revise(statement),
                Err(ErrorKind::Parse(_))
            ));
            assert_eq!(the_context.base.len(), 1);
        }
    }
}
