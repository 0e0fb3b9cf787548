//! Integration tests for cardkit
//!
//! These tests exercise the public library API the way a renderer would use
//! it: building card options, resolving shapes, and reading values from an
//! injected environment.

use std::fs;

use tempfile::TempDir;

use cardkit::config::FileConfig;
use cardkit::environment::{Environment, Location, Screen};
use cardkit::{
    CardClassOptions, ShapeKind, backdrop_shape, is_live_tv_naming, is_resizable,
    location_search, parameter_by_name, portrait_shape, resolve_card_css_class_names,
    resolve_mixed_shape_by_aspect_ratio, square_shape, to_boolean, to_float,
};

/// Helper function to build card options for a non-music item
fn non_music_card() -> CardClassOptions {
    CardClassOptions {
        item_type: "non-music".to_string(),
        ..CardClassOptions::default()
    }
}

/// Helper function to write a config file into a temporary directory
fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

#[test]
fn test_live_tv_classification() {
    for item_type in ["Program", "Timer", "Recording"] {
        assert!(is_live_tv_naming(item_type));
    }
    for item_type in ["Movie", "Series", "Audio", "program", ""] {
        assert!(!is_live_tv_naming(item_type));
    }
}

#[test]
fn test_mixed_shape_boundaries() {
    assert_eq!(resolve_mixed_shape_by_aspect_ratio(Some(1.33)), "mixedBackdrop");
    assert_eq!(resolve_mixed_shape_by_aspect_ratio(Some(1.32)), "mixedSquare");
    assert_eq!(resolve_mixed_shape_by_aspect_ratio(Some(0.71)), "mixedPortrait");
    assert_eq!(resolve_mixed_shape_by_aspect_ratio(Some(0.72)), "mixedSquare");
    assert_eq!(resolve_mixed_shape_by_aspect_ratio(None), "mixedSquare");
}

#[test]
fn test_shape_names() {
    assert_eq!(square_shape(false), "square");
    assert_eq!(square_shape(true), "overflowSquare");
    assert_eq!(backdrop_shape(false), "backdrop");
    assert_eq!(backdrop_shape(true), "overflowBackdrop");
    assert_eq!(portrait_shape(false), "portrait");
    assert_eq!(portrait_shape(true), "overflowPortrait");
}

#[test]
fn test_shape_name_feeds_class_composer() {
    let opts = CardClassOptions {
        shape: Some(ShapeKind::Backdrop.shape(true).to_string()),
        ..non_music_card()
    };

    assert_eq!(
        resolve_card_css_class_names(&opts),
        "card overflowBackdropCard card-withuserdata"
    );
}

#[test]
fn test_is_resizable_with_injected_screen() {
    assert!(is_resizable(
        1024.0,
        &Screen {
            avail_width: 2048.0
        }
    ));
    assert!(!is_resizable(
        1024.0,
        &Screen {
            avail_width: 1044.0
        }
    ));
    assert!(!is_resizable(1024.0, &None::<Screen>));
}

#[test]
fn test_all_card_fields() {
    let opts = CardClassOptions {
        shape: Some("portrait".to_string()),
        card_css_class: Some("card-css".to_string()),
        card_class: Some("card".to_string()),
        tag_name: Some("button".to_string()),
        item_type: "non-music".to_string(),
        child_count: Some(5),
        show_child_count_indicator: true,
        is_tv: true,
        enable_focus_transform: true,
        is_desktop: true,
    };

    assert_eq!(
        resolve_card_css_class_names(&opts),
        "card portraitCard card-css card card-hoverable show-focus show-animation groupedCard card-withuserdata itemAction"
    );
}

#[test]
fn test_music_cards_are_plain() {
    for item_type in ["MusicAlbum", "MusicArtist", "Audio"] {
        let opts = CardClassOptions {
            item_type: item_type.to_string(),
            ..CardClassOptions::default()
        };
        assert_eq!(resolve_card_css_class_names(&opts), "card");
    }
}

#[test]
fn test_emission_order_is_stable() {
    let opts = CardClassOptions {
        tag_name: Some("button".to_string()),
        is_desktop: true,
        card_class: Some("late".to_string()),
        shape: Some("square".to_string()),
        ..non_music_card()
    };

    assert_eq!(
        resolve_card_css_class_names(&opts),
        "card squareCard late card-hoverable card-withuserdata itemAction"
    );
}

#[test]
#[allow(clippy::float_cmp, clippy::approx_constant)]
fn test_coercion_examples() {
    assert!(to_boolean(Some("true"), false));
    assert!(!to_boolean(Some("false"), false));
    assert!(to_boolean(Some("x"), true));
    assert!(!to_boolean(None, false));

    assert_eq!(to_float(Some("3.14"), 0.0), 3.14);
    assert_eq!(to_float(Some("abc"), 0.0), 0.0);
    assert_eq!(to_float(None, 5.0), 5.0);
    assert_eq!(to_float(Some("12px"), 0.0), 12.0);
}

#[test]
fn test_parameter_by_name_examples() {
    let nowhere = None::<Location>;

    assert_eq!(
        parameter_by_name("filter", Some("?filter=true&search=off"), &nowhere),
        "true"
    );
    assert_eq!(parameter_by_name("missing", Some("?a=1"), &nowhere), "");
    assert_eq!(parameter_by_name("search", Some("?filter=off"), &nowhere), "");
}

#[test]
fn test_location_shapes() {
    let parsed = Location::parse("https://jellyfin.org?search=true&filter=off");
    let href_only = Location::Href("https://jellyfin.org?search=true&filter=off".to_string());
    let without_query = Location::parse("https://jellyfin.org");

    assert_eq!(location_search(&parsed), "?search=true&filter=off");
    assert_eq!(location_search(&href_only), "?search=true&filter=off");
    assert_eq!(location_search(&without_query), "");
    assert_eq!(parameter_by_name("search", None, &parsed), "true");
}

#[test]
fn test_environment_from_config_file() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = write_config(
        &dir,
        r#"
[card]
shape = "portrait"
is_desktop = true

[environment]
screen_width = 2048
location = "https://jellyfin.org/web/#/details?id=42&serverId=abc"
"#,
    );

    let config = FileConfig::load_from(&path).expect("Failed to load config");
    let environment = config.environment.to_environment();

    assert!(environment.is_resizable(1024.0));
    assert_eq!(environment.location_search(), "?id=42&serverId=abc");
    assert_eq!(environment.parameter_by_name("id", None), "42");
    assert_eq!(config.card.shape.as_deref(), Some("portrait"));
}

#[test]
fn test_environment_without_sources() {
    let environment = Environment::default();

    assert!(!environment.is_resizable(1024.0));
    assert_eq!(environment.location_search(), "");
    assert_eq!(environment.parameter_by_name("id", None), "");
}

#[test]
fn test_idempotence() {
    let opts = CardClassOptions {
        is_tv: true,
        ..non_music_card()
    };
    let screen = Screen {
        avail_width: 1920.0,
    };
    let location = Location::parse("https://jellyfin.org?tab=1");

    let first = (
        resolve_card_css_class_names(&opts),
        resolve_mixed_shape_by_aspect_ratio(Some(0.9)),
        is_resizable(1280.0, &screen),
        parameter_by_name("tab", None, &location),
    );
    for _ in 0..3 {
        let again = (
            resolve_card_css_class_names(&opts),
            resolve_mixed_shape_by_aspect_ratio(Some(0.9)),
            is_resizable(1280.0, &screen),
            parameter_by_name("tab", None, &location),
        );
        assert_eq!(first, again);
    }
}
