use agm_belief::{
    base::BeliefBase, config::Config, context::Context, reports::Report,
    structures::formula::Formula,
};

fn renderings(the_context: &Context) -> Vec<String> {
    the_context
        .current_base()
        .into_iter()
        .map(|(rendering, _)| rendering)
        .collect()
}

mod scenarios {
    use super::*;

    #[test]
    fn revision_into_an_empty_base() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.revise("A").is_ok());

        assert_eq!(renderings(&the_context), vec!["A"]);
        assert_eq!(the_context.report(), Report::Satisfiable);
    }

    #[test]
    fn contradiction_evicts_the_original_belief() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.revise("A").is_ok());
        assert!(the_context.revise("~A").is_ok());

        assert_eq!(renderings(&the_context), vec!["~A"]);
        assert_eq!(the_context.report(), Report::Satisfiable);
    }

    #[test]
    fn the_least_entrenched_belief_is_evicted_first() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.revise("A").is_ok());
        assert!(the_context.revise("A >> B").is_ok());
        assert!(the_context.revise("~B").is_ok());

        // A, the belief at index 0, went; the implication and ~B are jointly satisfiable.
        assert_eq!(renderings(&the_context), vec!["~A | B", "~B"]);
        assert_eq!(the_context.report(), Report::Satisfiable);
    }

    #[test]
    fn contraction_of_an_absent_belief_is_a_no_op() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.revise("A").is_ok());
        assert!(the_context.revise("B").is_ok());

        the_context.contract("A");
        assert_eq!(renderings(&the_context), vec!["B"]);

        the_context.contract("A");
        assert_eq!(renderings(&the_context), vec!["B"]);
    }

    #[test]
    fn a_base_built_around_revision_may_be_inconsistent() {
        let base = BeliefBase::from_formulas([
            Formula::Atom('A'),
            Formula::not(Formula::Atom('A')),
        ]);

        assert!(!base.is_consistent());
    }
}
