//! End-to-end properties of theme composition.
//!
//! 1. **Name defaulting** — the resolved name is the given name, or "Dark".
//! 2. **Flag exclusivity** — `is_dark` and `is_light` follow the palette
//!    mode and are never both true.
//! 3. **Determinism** — equal options give equal themes, down to the
//!    serialized token tree.
//! 4. **Fixed categories** — breakpoints and component tokens never change,
//!    whatever the options.
//! 5. **Completeness** — every theme field is present in the serialized
//!    form.

use n_theme::{PaletteInput, ShapeInput, SpacingInput, ThemeMode};
use n_tokens::{Theme, ThemeOptions, compose};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn serialized(theme: &Theme) -> serde_json::Value {
    serde_json::to_value(theme).expect("theme serializes")
}

fn mode_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("dark".to_string()),
        Just("light".to_string()),
        "[a-z]{1,8}",
    ])
}

prop_compose! {
    fn options_strategy()(
        name in prop::option::of("[A-Za-z ]{0,16}"),
        mode in mode_strategy(),
        grid_size in prop::option::of(1u16..=32),
        border_radius in prop::option::of(0u16..=16),
    ) -> ThemeOptions {
        ThemeOptions {
            name,
            palette: mode.map(PaletteInput::with_mode),
            spacing: grid_size.map(|g| SpacingInput::with_grid_size(f32::from(g))),
            shape: border_radius.map(|r| ShapeInput::with_border_radius(f32::from(r))),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn empty_options_scenario() {
    let theme = compose(ThemeOptions::default());
    assert_eq!(theme.name(), "Dark");
    assert_eq!(theme.mode(), &ThemeMode::Dark);
    assert!(theme.is_dark());
    assert!(!theme.is_light());
}

#[test]
fn omitted_options_match_empty_options() {
    assert_eq!(serialized(&compose(None)), serialized(&compose(ThemeOptions::default())));
}

#[test]
fn custom_light_scenario() {
    let theme = compose(
        ThemeOptions::new()
            .with_name("Custom")
            .with_palette(PaletteInput::with_mode("light")),
    );
    let plain = compose(None);

    assert_eq!(theme.name(), "Custom");
    assert!(!theme.is_dark());
    assert!(theme.is_light());
    assert_eq!(theme.spacing(), plain.spacing());
    assert_eq!(theme.shape(), plain.shape());
    assert_eq!(theme.components(), plain.components());
}

#[test]
fn equal_spacing_input_gives_identical_spacing() {
    let a = compose(ThemeOptions::new().with_spacing(SpacingInput::with_grid_size(4.0)));
    let b = compose(ThemeOptions::new().with_spacing(SpacingInput::with_grid_size(4.0)));
    assert_eq!(a.spacing(), b.spacing());
    assert_eq!(a.spacing().x1, "4px");
}

#[test]
fn options_from_toml_compose_like_builder_options() {
    let from_file = ThemeOptions::from_toml_str(
        r#"
        name = "Custom"
        [palette]
        mode = "light"
        "#,
    )
    .expect("valid options");
    let built = ThemeOptions::new()
        .with_name("Custom")
        .with_palette(PaletteInput::with_mode("light"));
    assert_eq!(compose(from_file), compose(built));
}

#[test]
fn serialized_theme_has_every_field() {
    let value = serialized(&compose(None));
    let object = value.as_object().expect("theme serializes to an object");
    for key in [
        "name",
        "is_dark",
        "is_light",
        "palette",
        "breakpoints",
        "spacing",
        "shape",
        "components",
    ] {
        assert!(
            object.get(key).is_some_and(|v| !v.is_null()),
            "missing field {key}"
        );
    }
    assert_eq!(object["palette"]["mode"], "dark");
}

#[test]
fn concurrent_composition_agrees() {
    let expected = compose(None);
    let handles: Vec<_> = (0..4).map(|_| std::thread::spawn(|| compose(None))).collect();
    for handle in handles {
        assert_eq!(handle.join().expect("compose thread"), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Properties
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn name_defaults_to_dark(options in options_strategy()) {
        let expected = options.name.clone().unwrap_or_else(|| "Dark".to_string());
        let theme = compose(options);
        prop_assert_eq!(theme.name(), expected.as_str());
    }

    #[test]
    fn flags_follow_mode_and_exclude_each_other(options in options_strategy()) {
        let theme = compose(options);
        prop_assert!(!(theme.is_dark() && theme.is_light()));
        prop_assert_eq!(theme.is_dark(), theme.mode() == &ThemeMode::Dark);
        prop_assert_eq!(theme.is_light(), theme.mode() == &ThemeMode::Light);
    }

    #[test]
    fn composition_is_deterministic(options in options_strategy()) {
        let a = compose(options.clone());
        let b = compose(options);
        prop_assert_eq!(serialized(&a), serialized(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn fixed_categories_never_change(a in options_strategy(), b in options_strategy()) {
        let (a, b) = (compose(a), compose(b));
        prop_assert_eq!(a.breakpoints(), b.breakpoints());
        prop_assert_eq!(a.components(), b.components());
    }
}
