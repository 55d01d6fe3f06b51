use super::*;

fn heuristic(name: &str) -> bool {
    HeuristicPolicy::default().prefers_entity(name)
}

// -- Rule chain --

#[test]
fn test_rare_letter() {
    assert!(heuristic("Maître Pandawa"));
    // wins over the apprentissage exception
    assert!(heuristic("Apprentissage : Maître"));
}

#[test]
fn test_several_kinds_of_accent() {
    assert!(heuristic("Crâne et Épée"));
    assert!(heuristic("Forêt enchantée"));
    assert!(heuristic("Où est passée la 7e compagnie ?"));
}

#[test]
fn test_repeated_single_kind_is_not_enough() {
    assert!(!heuristic("Élément"));
    assert!(!heuristic("ÉPÉE"));
}

#[test]
fn test_single_e_accent() {
    assert!(heuristic("Épreuve du Zobal"));
    assert!(heuristic("La Mère"));
    assert!(heuristic("Très bien"));
}

#[test]
fn test_single_other_accent() {
    assert!(!heuristic("Crâne du Craqueleur"));
    assert!(!heuristic("Forêt"));
    assert!(!heuristic("Ça va"));
}

#[test]
fn test_exceptions() {
    assert!(!heuristic("Fée d'hiver"));
    assert!(!heuristic("L'Épreuve des Bworks"));
    assert!(!heuristic("Un été d'hiver"));
    assert!(!heuristic("Apprentissage : Forgeron élu"));
}

#[test]
fn test_markers() {
    assert!(heuristic("Kwismas"));
    assert!(heuristic("Le père Kwismas"));
}

#[test]
fn test_spaced_punctuation() {
    assert!(heuristic("Bonjour !"));
    assert!(heuristic("Quoi ? Non"));
    assert!(!heuristic("Quoi?Non"));
}

#[test]
fn test_default_is_normalized() {
    assert!(!heuristic("Simple"));
    assert!(!heuristic(""));
}

#[test]
fn test_letter_pairs_apply_when_counting_is_disabled() {
    let rules = SelectorRules {
        accented: Vec::new(),
        ..SelectorRules::default()
    };
    let policy = HeuristicPolicy::new(rules);
    assert!(policy.prefers_entity("à et é"));
    assert!(!policy.prefers_entity("à seul"));
}

// -- Extra patterns --

#[test]
fn test_extra_single_accent_exception() {
    let rules = SelectorRules::with_exceptions(&[] as &[&str], &["(?i)zobal"]).unwrap();
    let policy = HeuristicPolicy::new(rules);
    assert!(!policy.prefers_entity("Épreuve du Zobal"));
    // builtin patterns are still there
    assert!(!policy.prefers_entity("Fée d'hiver"));
    assert!(policy.prefers_entity("La Mère"));
}

#[test]
fn test_extra_multi_accent_exception() {
    let rules = SelectorRules::with_exceptions(&["enchantée$"], &[]).unwrap();
    let policy = HeuristicPolicy::new(rules);
    assert!(!policy.prefers_entity("Forêt enchantée"));
    assert!(policy.prefers_entity("Crâne et Épée"));
}

#[test]
fn test_invalid_pattern() {
    let err = SelectorRules::with_exceptions(&["(unclosed"], &[]).unwrap_err();
    match err {
        LinkerError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("unexpected error: {other}"),
    }
}

// -- Other policies --

#[test]
fn test_fixed_policy() {
    assert!(FixedPolicy::Entity.prefers_entity("Simple"));
    assert!(!FixedPolicy::Normalized.prefers_entity("Maître Pandawa"));
    assert_eq!(FixedPolicy::Entity.primary_variant("x"), SlugVariant::Entity);
}

#[test]
fn test_primary_variant() {
    let policy = HeuristicPolicy::default();
    assert_eq!(policy.primary_variant("Épreuve du Zobal"), SlugVariant::Entity);
    assert_eq!(policy.primary_variant("Simple"), SlugVariant::Normalized);
}
