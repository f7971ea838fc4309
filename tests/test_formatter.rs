use letthemcook::{Fragment, Language, PredictionResult, ResultFormatter, Status};
use scraper::{Html, Selector};

/// Text content of every element matching `selector`, entities decoded
fn entries(fragment: &Fragment, selector: &str) -> Vec<String> {
    let document = Html::parse_fragment(fragment.as_str());
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

fn success(ingredients: &str, steps: &str) -> PredictionResult {
    PredictionResult {
        status: Status::Success,
        predicted_name: "Nasi Goreng".to_string(),
        confidence: 0.8734,
        calories_per_serving: Some("250&ndash;350 kkal".to_string()),
        main_ingredients: Some(ingredients.to_string()),
        recipe_steps: Some(steps.to_string()),
        error: None,
    }
}

#[test]
fn test_ingredients_one_entry_per_segment() {
    let formatter = ResultFormatter::default();
    let fragment = formatter.format_ingredients(Some("Nasi, , Ayam ,Telur"));

    assert_eq!(
        entries(&fragment, "ul.ingredients-list > li"),
        vec!["Nasi", "Ayam", "Telur"]
    );
}

#[test]
fn test_ingredients_preserve_order_and_characters() {
    let formatter = ResultFormatter::default();
    let text = "  Bawang merah (3 siung) ,Kecap <manis> & asin,  Cabai rawit–hijau  ";
    let fragment = formatter.format_ingredients(Some(text));

    assert_eq!(
        entries(&fragment, "ul.ingredients-list > li"),
        vec![
            "Bawang merah (3 siung)",
            "Kecap <manis> & asin",
            "Cabai rawit–hijau"
        ]
    );
}

#[test]
fn test_recipe_steps_strip_leading_ordinals() {
    let formatter = ResultFormatter::default();
    let fragment = formatter.format_recipe_steps(Some("1. Cuci beras\n2.Masak nasi\nSajikan"));

    assert_eq!(
        entries(&fragment, "ol.recipe-list > li"),
        vec!["Cuci beras", "Masak nasi", "Sajikan"]
    );
}

#[test]
fn test_recipe_steps_keep_inner_numbers() {
    let formatter = ResultFormatter::default();
    let fragment = formatter.format_recipe_steps(Some(
        "3. Panggang 25 menit pada 180°C.\nTambahkan 2. sendok gula\n\n\n",
    ));

    assert_eq!(
        entries(&fragment, "ol.recipe-list > li"),
        vec!["Panggang 25 menit pada 180°C.", "Tambahkan 2. sendok gula"]
    );
}

#[test]
fn test_sentinels_render_as_paragraph() {
    let formatter = ResultFormatter::default();

    let ingredients = formatter.format_ingredients(Some("Data tidak tersedia"));
    assert_eq!(ingredients.as_str(), "<p>Data tidak tersedia</p>");
    assert!(entries(&ingredients, "li").is_empty());

    let recipe = formatter.format_recipe_steps(Some("Resep belum ditambahkan."));
    assert_eq!(recipe.as_str(), "<p>Resep belum ditambahkan.</p>");
    assert!(entries(&recipe, "li").is_empty());
}

#[test]
fn test_formatting_is_idempotent() {
    let formatter = ResultFormatter::default();
    let result = success("Nasi, Telur, Kecap", "1. Tumis bumbu\n2. Masukkan nasi");

    assert_eq!(
        formatter.assemble_display(&result),
        formatter.assemble_display(&result)
    );
    assert_eq!(
        formatter.format_ingredients(Some("a,b")).into_string(),
        formatter.format_ingredients(Some("a,b")).into_string()
    );
}

#[test]
fn test_success_display() {
    let formatter = ResultFormatter::default();
    let fragment = formatter.assemble_display(&success("Nasi, Telur", "1. Goreng"));
    let html = fragment.as_str();

    assert!(html.contains("87.34%"));
    assert!(html.contains("250–350 kkal"));
    assert!(!html.contains("&ndash;"));

    let headings = entries(&fragment, "div.result-item > h4");
    assert_eq!(
        headings,
        vec![
            "🍽️ Prediksi: Nasi Goreng",
            "🔥 Informasi Kalori",
            "🥦 Bahan Utama",
            "📝 Cara Membuat"
        ]
    );
    assert_eq!(entries(&fragment, "ul > li"), vec!["Nasi", "Telur"]);
    assert_eq!(entries(&fragment, "ol > li"), vec!["Goreng"]);
}

#[test]
fn test_success_display_with_missing_fields() {
    let formatter = ResultFormatter::new(Language::English);
    let result = PredictionResult {
        status: Status::Success,
        predicted_name: "Beef Tartare".to_string(),
        confidence: 0.5,
        ..Default::default()
    };
    let fragment = formatter.assemble_display(&result);

    assert!(fragment.as_str().contains("50.00%"));
    assert!(fragment.as_str().contains("<p>Data tidak tersedia</p>"));
    assert!(fragment.as_str().contains("<p>Resep belum ditambahkan.</p>"));
    assert!(entries(&fragment, "li").is_empty());
}

#[test]
fn test_failure_display() {
    let formatter = ResultFormatter::default();
    let fragment = formatter.assemble_display(&PredictionResult::failure("model unavailable"));

    assert_eq!(
        entries(&fragment, "p.error-message"),
        vec!["Prediksi gagal: model unavailable"]
    );
    assert!(!fragment.as_str().contains("result-item"));
    assert!(!fragment.as_str().contains('%'));
    assert!(entries(&fragment, "h4").is_empty());
}

#[test]
fn test_failure_message_is_escaped() {
    let formatter = ResultFormatter::default();
    let fragment =
        formatter.assemble_display(&PredictionResult::failure("<img src=x onerror=alert(1)>"));

    assert!(!fragment.as_str().contains("<img"));
    assert!(entries(&fragment, "img").is_empty());
    assert_eq!(
        entries(&fragment, "p.error-message"),
        vec!["Prediksi gagal: <img src=x onerror=alert(1)>"]
    );
}

#[test]
fn test_untrusted_list_items_cannot_inject_markup() {
    let formatter = ResultFormatter::default();
    let fragment = formatter.assemble_display(&success(
        "</ul><script>x()</script>, Garam",
        "1. </ol><b>bold</b>",
    ));

    assert!(entries(&fragment, "script").is_empty());
    assert!(entries(&fragment, "b").is_empty());
    assert_eq!(
        entries(&fragment, "ul > li"),
        vec!["</ul><script>x()</script>", "Garam"]
    );
    assert_eq!(entries(&fragment, "ol > li"), vec!["</ol><b>bold</b>"]);
}
