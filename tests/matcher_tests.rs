use aki_tui::matcher::{ResponseCategory, ResponseMatcher, normalize};
use rand::SeedableRng;
use rand::rngs::StdRng;
mod common;

#[ctor::ctor]
fn _init() { common::init(); }

#[test]
fn interesting_fact_request_gets_health_fact() {
    let matcher = ResponseMatcher::default();
    let category = matcher.category_for("Cuéntame un dato interesante").expect("category");
    assert_eq!(category.name, "health-facts");

    let reply = matcher.find("Cuéntame un dato interesante").expect("reply");
    assert!(category.responses.iter().any(|r| r == reply));
}

#[test]
fn accents_and_case_do_not_matter() {
    let matcher = ResponseMatcher::default();
    for input in ["POESÍA por favor", "poesia por favor", "  Poesía  "] {
        let category = matcher.category_for(input).expect("category");
        assert_eq!(category.name, "creative-poems", "input {input:?}");
    }
    assert_eq!(normalize("  ÁrBoL Ñandú "), "arbol nandu");
}

#[test]
fn unmatched_text_is_none() {
    let matcher = ResponseMatcher::default();
    assert!(matcher.find("xyzzy").is_none());
    assert!(matcher.find("").is_none());
}

#[test]
fn earlier_category_wins_over_later_one() {
    // "categoria de doctores" と "cirugia" の両方を含む入力は先に宣言された方
    let matcher = ResponseMatcher::default();
    let category = matcher
        .category_for("categoria de doctores y documentacion de cirugia")
        .expect("category");
    assert_eq!(category.name, "doctor-categories");
}

#[test]
fn custom_catalog_with_seeded_rng_is_reproducible() {
    let matcher = ResponseMatcher::new(vec![
        ResponseCategory::new("saludo", ["Hola"], ["¡Hola!", "¡Buenas!", "¿Qué tal?"]),
        ResponseCategory::new("vacia", ["nada"], Vec::<&str>::new()),
    ]);

    let a = matcher.find_with("hola aki", &mut StdRng::seed_from_u64(9)).map(str::to_string);
    let b = matcher.find_with("hola aki", &mut StdRng::seed_from_u64(9)).map(str::to_string);
    assert!(a.is_some());
    assert_eq!(a, b);

    // 応答の無いカテゴリは一致しても None
    assert!(matcher.find_with("nada", &mut StdRng::seed_from_u64(1)).is_none());
}

#[test]
fn every_builtin_keyword_resolves_to_its_own_category() {
    let matcher = ResponseMatcher::default();
    let mut rng = StdRng::seed_from_u64(3);
    for category in matcher.categories() {
        assert!(!category.responses.is_empty(), "{} has no responses", category.name);
        for keyword in &category.keywords {
            let found = matcher.category_for(keyword).expect("keyword matches");
            assert_eq!(found.name, category.name, "keyword {keyword:?}");

            let sentence = format!("Hola AKI, {keyword} por favor");
            let reply = matcher.find_with(&sentence, &mut rng).expect("reply");
            assert!(category.responses.iter().any(|r| r == reply), "keyword {keyword:?}");
            assert!(matcher.find(keyword).is_some_and(|r| category.responses.iter().any(|c| c == r)));
        }
    }
}
