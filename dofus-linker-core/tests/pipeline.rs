use dofus_linker_core::{
    DEFAULT_BASE_URL, ExceptionTable, Resolution, SlugVariant, finalize, generate_url_variants,
    to_entity_slug, to_normalized_slug,
};

const NAMES: &[&str] = &[
    "",
    "Épreuve du Zobal",
    "L'Œil de Forfut",
    "Crâne du Craqueleur",
    "Où est le trésor ?",
    "Apprentissage : Le sombre",
    "On m'appelle Trinity",
    "La Carte d'identité",
    "Salut : à toi",
    "Bravo !",
    "   ",
    "¿¡ Ω !?",
];

fn url_for(slug: &str) -> String {
    format!("{DEFAULT_BASE_URL}/{slug}.html")
}

#[test]
fn slugs_use_url_safe_charset() {
    for name in NAMES {
        for slug in [to_normalized_slug(name), to_entity_slug(name)] {
            assert!(
                slug.bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'),
                "{slug:?}"
            );
            assert!(!slug.starts_with('-'));
            assert!(!slug.ends_with('-'));
            assert_eq!(finalize(&slug), slug);
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for name in NAMES {
        assert_eq!(generate_url_variants(name), generate_url_variants(name));
    }
}

#[test]
fn urls_are_the_two_slugs() {
    for name in NAMES {
        let urls = generate_url_variants(name);
        let Resolution::Heuristic { primary } = urls.resolution else {
            panic!("unexpected exception hit for {name:?}");
        };
        let (first, second) = match primary {
            SlugVariant::Entity => (to_entity_slug(name), to_normalized_slug(name)),
            SlugVariant::Normalized => (to_normalized_slug(name), to_entity_slug(name)),
        };
        assert_eq!(urls.primary, url_for(&first));
        assert_eq!(urls.fallback, url_for(&second));
    }
}

#[test]
fn every_exception_short_circuits() {
    let table = ExceptionTable::builtin();
    for (name, slug) in table.iter() {
        for variant in [name.to_string(), name.to_uppercase()] {
            let urls = generate_url_variants(&variant);
            assert_eq!(urls.resolution, Resolution::Exception, "{variant}");
            assert_eq!(urls.primary, url_for(slug));
            assert_eq!(urls.fallback, urls.primary);
        }
    }
}

#[test]
fn exception_slugs_are_used_verbatim() {
    let urls = generate_url_variants("La mort vous va si bien");
    assert_eq!(urls.primary, url_for("-la-mort-vous-va-si-bien"));
}

#[test]
fn duplicate_key_keeps_last_slug() {
    let table = ExceptionTable::builtin();
    assert_eq!(
        table.lookup("La serveuse Dame Cloude"),
        Some("la-tenanciegravere-dame-cloude")
    );
    assert_eq!(table.duplicates().len(), 1);
    assert_eq!(table.duplicates()[0].discarded, "la-tenanciere-dame-cloude");
}

#[test]
fn empty_name_is_degenerate() {
    let urls = generate_url_variants("");
    assert_eq!(urls.primary, format!("{DEFAULT_BASE_URL}/.html"));
    assert_eq!(urls.fallback, urls.primary);
    assert!(urls.is_degenerate());
}

#[test]
fn concurrent_generation() {
    let handles: Vec<_> = NAMES
        .iter()
        .map(|name| std::thread::spawn(move || generate_url_variants(name)))
        .collect();
    for (handle, name) in handles.into_iter().zip(NAMES) {
        assert_eq!(handle.join().unwrap(), generate_url_variants(name));
    }
}
