use pretty_assertions::assert_eq;
use sigcraft::color::{contrast_ratio, parse_hex, signature_dark_color};
use sigcraft::template::{
    ContentStyle, IconStyle, ImageAlignment, ImageStyle, Layout, Padding, RowLayout,
};
use sigcraft::{
    check_contrast, decode, encode, encode_with, to_plain_text, validate_settings, ColorMode,
    FieldType, ImageFit, ImageShape, RenderOptions, Settings, SignatureError,
};
use std::fs;
use std::path::PathBuf;

fn get_fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path.push(filename);
    path
}

fn load(filename: &str) -> Settings {
    Settings::load(get_fixture_path(filename)).unwrap()
}

fn set_visible(settings: &mut Settings, field: FieldType, visible: bool) {
    for f in settings.template.field_order.iter_mut() {
        if f.field_type == field {
            f.visible = visible;
        }
    }
}

// Fixture loading
#[test]
fn test_yaml_fixture_loads_with_defaults() {
    let paul = load("paul.yaml");
    assert_eq!(paul.data.full_name, "Paul Atreides");
    assert_eq!(paul.data.phone, "+1 555 0100");
    assert_eq!(paul.style.primary_color, "#B45309");
    assert_eq!(paul.style.secondary_color, "#4b5563");
    assert_eq!(paul.template.image_alignment, ImageAlignment::Start);
    assert_eq!(paul.template.field_order.len(), FieldType::ALL.len());
    assert!(paul.image.is_none());
    assert!(validate_settings(&paul).is_ok());
}

#[test]
fn test_json_fixture_loads_overlay() {
    let chani = load("chani.json");
    assert_eq!(chani.template.layout, Layout::Vertical);
    assert_eq!(chani.style.image_fit, ImageFit::Fill);
    let image = chani.image.as_ref().unwrap();
    assert_eq!(image.shape, ImageShape::Rounded);
    assert_eq!(image.corner_radius, 20);
    assert!(validate_settings(&chani).is_ok());
}

// Generator properties
#[test]
fn test_reencode_is_byte_identical() {
    let paul = load("paul.yaml");
    assert_eq!(encode(&paul), encode(&paul.clone()));
    let chani = load("chani.json");
    assert_eq!(
        encode_with(&chani, &RenderOptions::dark()),
        encode_with(&chani, &RenderOptions::dark())
    );
}

#[test]
fn test_invisible_fields_never_appear() {
    let mut paul = load("paul.yaml");
    set_visible(&mut paul, FieldType::Email, false);
    set_visible(&mut paul, FieldType::Photo, false);
    set_visible(&mut paul, FieldType::SocialLinks, false);
    let html = encode(&paul);
    assert!(!html.contains("muaddib@arrakis.dune"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("github.com/atreides"));
    assert!(html.contains("Arrakis Spice Operations"));

    let chani = load("chani.json");
    assert!(!encode(&chani).contains("555 0142"));
}

#[test]
fn test_required_flag_does_not_reveal_hidden_email() {
    let mut paul = load("paul.yaml");
    for f in paul.template.field_order.iter_mut() {
        if f.field_type == FieldType::Email {
            f.visible = false;
            f.required = true;
        }
    }
    assert!(!encode(&paul).contains("muaddib@arrakis.dune"));
    assert!(!encode_with(&paul, &RenderOptions::dark()).contains("muaddib@arrakis.dune"));
    assert!(matches!(
        validate_settings(&paul),
        Err(SignatureError::UnexpectedRequiredField { .. })
    ));
}

#[test]
fn test_full_name_is_always_rendered() {
    let mut paul = load("paul.yaml");
    set_visible(&mut paul, FieldType::FullName, false);
    for f in paul.template.field_order.iter_mut() {
        f.required = false;
    }
    assert!(encode(&paul).contains(">Paul Atreides</span>"));

    paul.template
        .field_order
        .retain(|f| f.field_type != FieldType::FullName);
    assert!(encode(&paul).contains(">Paul Atreides</span>"));
}

#[test]
fn test_empty_optional_fields_are_omitted() {
    let mut settings = Settings::default();
    settings.data.full_name = "Alia Atreides".to_string();
    let html = encode(&settings);
    assert!(html.contains("Alia Atreides"));
    assert!(!html.contains("<a "));
    assert!(!html.contains("<img"));
    assert!(!html.contains("undefined"));
    assert_eq!(html.matches("<span").count(), 1);
}

#[test]
fn test_image_size_tracks_scale() {
    let mut paul = load("paul.yaml");
    let mut previous = 0;
    for scale in [0.5, 0.8, 1.0, 1.256, 2.0] {
        paul.template.image_scale = scale;
        let size = (100.0_f64 * scale).round() as u32;
        let html = encode(&paul);
        assert!(html.contains(&format!(r#"width="{}" height="{}""#, size, size)));
        assert!(html.contains(&format!("width: {}px; height: {}px;", size, size)));
        assert!(size > previous);
        previous = size;
    }
}

#[test]
fn test_dark_lightening_is_monotonic_and_clamped() {
    for hex in ["#000000", "#B45309", "#2563eb", "#d0d0d0", "#ffffff"] {
        let (r, g, b) = parse_hex(hex).unwrap();
        let (dr, dg, db) = parse_hex(&signature_dark_color(hex)).unwrap();
        assert_eq!(dr, r.saturating_add(60));
        assert_eq!(dg, g.saturating_add(60));
        assert_eq!(db, b.saturating_add(60));
        assert!(dr >= r && dg >= g && db >= b);
    }
    assert_eq!(signature_dark_color("#d0d0d0"), "#ffffff");
    assert_eq!(signature_dark_color("not-a-color"), "not-a-color");
}

#[test]
fn test_contrast_warnings_are_advisory() {
    let mut settings = load("paul.yaml");
    settings.style.secondary_color = "#fde047".to_string();
    let warnings = check_contrast(&settings.style, ColorMode::Light);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].ratio < 4.5);
    assert!(contrast_ratio("#000000", "#ffffff").unwrap() > 20.9);
    // export is untouched
    assert!(encode(&settings).contains("#fde047"));
}

// Parser properties
#[test]
fn test_decode_null_safety() {
    assert!(decode("").is_none());
    assert!(decode("<div>not a signature</div>").is_none());
    assert!(decode("<table></table>").is_none());
    assert!(decode("<table><tr></tr></table>").is_none());
}

#[test]
fn test_paul_round_trip() {
    let paul = load("paul.yaml");
    let decoded = decode(&encode(&paul)).unwrap();
    assert_eq!(decoded.data.full_name, "Paul Atreides");
    assert_eq!(decoded.data.email, "muaddib@arrakis.dune");
    assert_eq!(decoded.template.layout, Layout::Horizontal);
    assert_eq!(decoded.style.primary_color, "#B45309");
    assert_eq!(decoded.template.content_style, ContentStyle::Compact);
    assert_eq!(decoded.template.padding, Padding::default());
    assert_eq!(decoded.template.image_alignment, ImageAlignment::Start);
    assert_eq!(decoded.data.social_links.len(), 1);
    assert_eq!(encode(&decoded), encode(&paul));
}

#[test]
fn test_chani_round_trip_through_settings_file() {
    let chani = load("chani.json");
    let html = encode(&chani);
    let decoded = decode(&html).unwrap();

    assert_eq!(encode(&decoded), html);
    assert_eq!(decoded.template.layout, Layout::Vertical);
    assert_eq!(decoded.template.title_layout, RowLayout::Inline);
    assert_eq!(decoded.template.cta_layout, RowLayout::Inline);
    assert_eq!(decoded.template.icon_style, IconStyle::Solid);
    assert_eq!(decoded.template.image_scale, 0.75);
    assert_eq!(decoded.data.address, "Sietch Tabr, Arrakis");
    assert_eq!(decoded.data.additional_cta_link, "https://tabr.dune/water");
    assert_eq!(decoded.data.phone, "");

    let yaml = decoded.to_yaml_string().unwrap();
    let reloaded = Settings::from_yaml_str(&yaml).unwrap();
    assert_eq!(reloaded, decoded);
}

#[test]
fn test_legacy_fixture_decodes_through_heuristics() {
    let html = fs::read_to_string(get_fixture_path("legacy-signature.html")).unwrap();
    let decoded = decode(&html).expect("legacy-signature.html should import");

    assert_eq!(decoded.data.full_name, "Lady Jessica");
    assert_eq!(decoded.data.job_title, "Reverend Mother");
    assert_eq!(decoded.data.company, "Bene Gesserit");
    assert_eq!(decoded.data.email, "jessica@caladan.dune");
    assert_eq!(decoded.data.phone, "+1 555 0199");
    assert_eq!(decoded.data.website, "https://caladan.dune");
    assert_eq!(decoded.data.photo, "https://caladan.dune/jessica.jpg");

    assert_eq!(decoded.style.font_family, "Georgia, serif");
    assert_eq!(decoded.style.primary_color, "#7c3aed");
    assert_eq!(decoded.style.secondary_color, "#0f766e");
    assert_eq!(decoded.style.image_fit, ImageFit::Contain);

    let t = &decoded.template;
    assert_eq!(t.layout, Layout::Vertical);
    assert_eq!(t.image_style, ImageStyle::Rounded);
    assert_eq!(t.image_alignment, ImageAlignment::Center);
    assert_eq!(t.content_style, ContentStyle::Spacious);
    assert!(t.show_icons);
    assert_eq!(t.icon_style, IconStyle::Outline);
    assert_eq!(t.image_scale, 0.9);
    assert_eq!(t.title_layout, RowLayout::Inline);
    assert_eq!(
        t.padding,
        Padding {
            top: 12,
            right: 20,
            bottom: 12,
            left: 20
        }
    );
    assert!(decoded.image.is_none());
}

// Plain text
#[test]
fn test_plain_text_has_name_and_contacts() {
    let text = to_plain_text(&encode(&load("paul.yaml")));
    assert!(text.contains("Paul Atreides"));
    assert!(text.contains("muaddib@arrakis.dune"));
    assert!(text.contains("+1 555 0100"));
    assert!(text.contains("arrakis.dune"));
    assert!(!text.contains('<'));

    let legacy = fs::read_to_string(get_fixture_path("legacy-signature.html")).unwrap();
    let text = to_plain_text(&legacy);
    assert!(text.contains("Reverend Mother • Bene Gesserit"));
}

// Validation
#[test]
fn test_invalid_color_fixture() {
    let settings = load("invalid-color.yaml");
    assert!(matches!(
        validate_settings(&settings),
        Err(SignatureError::InvalidColor { .. })
    ));
}

#[test]
fn test_duplicate_field_fixture() {
    let settings = load("duplicate-field.yaml");
    assert!(matches!(
        validate_settings(&settings),
        Err(SignatureError::DuplicateField { .. })
    ));
}

#[test]
fn test_validator_rejects_bad_values() {
    let mut settings = load("paul.yaml");
    settings.data.full_name.clear();
    assert!(matches!(
        validate_settings(&settings),
        Err(SignatureError::MissingFullName)
    ));

    let mut settings = load("paul.yaml");
    settings.template.image_scale = 0.0;
    assert!(matches!(
        validate_settings(&settings),
        Err(SignatureError::InvalidImageScale { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Settings::load(get_fixture_path("no-such-file.yaml"));
    assert!(matches!(result, Err(SignatureError::Io(_))));
}
