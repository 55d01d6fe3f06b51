use super::*;

fn record(id: i64, fr: Option<&str>) -> CandidateRecord {
    CandidateRecord {
        id,
        name_en: Some(format!("english {id}")),
        name_fr: fr.map(str::to_string),
    }
}

#[test]
fn test_default_order() {
    assert_eq!(search_order(PageKind::Unknown), ContentCategory::ALL.to_vec());
}

#[test]
fn test_matching_category_first() {
    let order = search_order(PageKind::Spell);
    assert_eq!(order[0], ContentCategory::Spells);
    assert_eq!(order[1], ContentCategory::Quests);
    assert_eq!(order.len(), 9);

    let order = search_order(PageKind::Monster);
    assert_eq!(
        order[..4],
        [
            ContentCategory::Monsters,
            ContentCategory::Quests,
            ContentCategory::Items,
            ContentCategory::Subareas,
        ]
    );
}

#[test]
fn test_every_kind_keeps_all_categories() {
    for kind in PageKind::ALL {
        let mut order = search_order(kind);
        order.sort_by_key(|c| c.api_path());
        let mut all = ContentCategory::ALL.to_vec();
        all.sort_by_key(|c| c.api_path());
        assert_eq!(order, all, "{kind}");
    }
}

#[test]
fn test_page_kind_from_str() {
    assert_eq!("quest".parse::<PageKind>().unwrap(), PageKind::Quest);
    assert_eq!("Quests".parse::<PageKind>().unwrap(), PageKind::Quest);
    assert_eq!("SUBAREA".parse::<PageKind>().unwrap(), PageKind::Subarea);
    assert_eq!("unknown".parse::<PageKind>().unwrap(), PageKind::Unknown);
    assert!("pets".parse::<PageKind>().is_err());
}

#[test]
fn test_french_name_follows_order() {
    let mut results = LookupResults::new();
    results.insert(ContentCategory::Items, vec![record(1, Some("Épée"))]);
    results.insert(ContentCategory::Quests, vec![record(2, Some("Quête"))]);

    assert_eq!(
        results.french_name(&search_order(PageKind::Unknown)),
        Some("Quête")
    );
    assert_eq!(results.french_name(&search_order(PageKind::Item)), Some("Épée"));
}

#[test]
fn test_french_name_uses_first_record_only() {
    let mut results = LookupResults::new();
    results.insert(
        ContentCategory::Quests,
        vec![record(1, None), record(2, Some("Seconde"))],
    );
    results.insert(ContentCategory::Items, vec![record(3, Some("Objet"))]);

    assert_eq!(results.french_name(&search_order(PageKind::Unknown)), None);
}

#[test]
fn test_empty_categories_are_skipped() {
    let mut results = LookupResults::new();
    results.insert(ContentCategory::Quests, Vec::new());
    results.insert(ContentCategory::Spells, vec![record(9, Some("Sort"))]);

    let order = search_order(PageKind::Unknown);
    assert_eq!(results.french_name(&order), Some("Sort"));
    assert_eq!(
        results.first_match(&order).map(|(c, r)| (c, r.id)),
        Some((ContentCategory::Spells, 9))
    );
}

#[test]
fn test_no_results() {
    let results = LookupResults::new();
    assert!(results.is_empty());
    assert_eq!(results.french_name(&ContentCategory::ALL), None);
}
