use super::selection::{
    parse_copies, parse_rate, OrderSelection, DEFAULT_PAPER_RATE, DEFAULT_SIDE_MULTIPLIER,
};
use crate::domain::a002_service::ChoiceOption;
use serde::{Deserialize, Serialize};

// ============================================================================
// Pricing mode
// ============================================================================

/// How the total is derived from a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Document printing: `round(pages × paper rate × side × copies)`.
    /// The paper option value is a per-page rate.
    PerPage,
    /// Service tabs: `ceil(base rate × type multiplier × side × copies)`.
    /// The paper option value is a type multiplier.
    PerItem,
}

impl PricingMode {
    /// Paper value used when the control is empty or unreadable
    pub fn paper_fallback(&self) -> f64 {
        match self {
            PricingMode::PerPage => DEFAULT_PAPER_RATE,
            PricingMode::PerItem => 1.0,
        }
    }
}

/// Compute the order total. Never negative.
pub fn quote(mode: PricingMode, base_rate: f64, selection: &OrderSelection) -> u64 {
    let copies = f64::from(selection.copy_count);
    let raw = match mode {
        PricingMode::PerPage => {
            (f64::from(selection.page_count)
                * selection.paper_rate
                * selection.side_multiplier
                * copies)
                .round()
        }
        PricingMode::PerItem => {
            (base_rate * selection.paper_rate * selection.side_multiplier * copies).ceil()
        }
    };
    if raw.is_finite() && raw > 0.0 {
        raw as u64
    } else {
        0
    }
}

// ============================================================================
// Synchronizer
// ============================================================================

/// Raw control state the synchronizer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    pub mode: PricingMode,
    pub base_rate: f64,
    pub paper_value: String,
    pub side_value: String,
    pub copies: String,
    pub page_count: u32,
}

/// Everything written back to the form after a recompute.
///
/// The visible total and the hidden total field both render `total`, so they
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub selection: OrderSelection,
    pub total: u64,
    pub paper_label: String,
    pub side_label: String,
}

/// Recompute the total and the label mirrors from the current control state.
pub fn recompute(
    inputs: &PricingInputs,
    paper_options: &[ChoiceOption],
    side_options: &[ChoiceOption],
) -> PriceSnapshot {
    let selection = OrderSelection {
        paper_rate: option_amount(paper_options, &inputs.paper_value)
            .unwrap_or_else(|| inputs.mode.paper_fallback()),
        side_multiplier: option_amount(side_options, &inputs.side_value)
            .unwrap_or(DEFAULT_SIDE_MULTIPLIER),
        copy_count: parse_copies(&inputs.copies),
        page_count: inputs.page_count,
    };
    PriceSnapshot {
        selection,
        total: quote(inputs.mode, inputs.base_rate, &selection),
        paper_label: selected_label(paper_options, &inputs.paper_value),
        side_label: selected_label(side_options, &inputs.side_value),
    }
}

/// Numeric amount behind a select value: the option's explicit multiplier
/// when it has one, otherwise the value itself read as a number.
pub fn option_amount(options: &[ChoiceOption], value: &str) -> Option<f64> {
    options
        .iter()
        .find(|o| o.value == value)
        .and_then(|o| o.multiplier)
        .or_else(|| parse_rate(value))
}

/// Label of the option carrying `value`. A select with no match shows its
/// first option, so that label is mirrored instead.
pub fn selected_label(options: &[ChoiceOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .or_else(|| options.first())
        .map(|o| o.label.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<ChoiceOption> {
        vec![
            ChoiceOption::new("Black & White", "2"),
            ChoiceOption::new("Color", "10"),
        ]
    }

    fn sides() -> Vec<ChoiceOption> {
        vec![
            ChoiceOption::new("Single Sided", "1"),
            ChoiceOption::new("Double Sided", "1.6"),
        ]
    }

    fn per_page(paper: &str, side: &str, copies: &str, pages: u32) -> PricingInputs {
        PricingInputs {
            mode: PricingMode::PerPage,
            base_rate: 0.0,
            paper_value: paper.to_string(),
            side_value: side.to_string(),
            copies: copies.to_string(),
            page_count: pages,
        }
    }

    #[test]
    fn test_per_page_total() {
        let snapshot = recompute(&per_page("2", "1", "3", 12), &options(), &sides());
        assert_eq!(snapshot.total, 72);
        assert_eq!(snapshot.paper_label, "Black & White");
        assert_eq!(snapshot.side_label, "Single Sided");
    }

    #[test]
    fn test_per_page_rounds_to_nearest() {
        let selection = OrderSelection {
            paper_rate: 1.25,
            side_multiplier: 1.0,
            copy_count: 1,
            page_count: 3,
        };
        // 3.75 -> 4
        assert_eq!(quote(PricingMode::PerPage, 0.0, &selection), 4);
        let selection = OrderSelection {
            page_count: 5,
            paper_rate: 0.45,
            ..selection
        };
        // 2.25 -> 2
        assert_eq!(quote(PricingMode::PerPage, 0.0, &selection), 2);
    }

    #[test]
    fn test_per_page_matches_formula_grid() {
        for pages in [0u32, 1, 7, 120] {
            for rate in [0.0, 0.5, 2.0, 3.3] {
                for mult in [0.0, 1.0, 1.6] {
                    for copies in [1u32, 2, 9] {
                        let selection = OrderSelection {
                            paper_rate: rate,
                            side_multiplier: mult,
                            copy_count: copies,
                            page_count: pages,
                        };
                        let expected =
                            (f64::from(pages) * rate * mult * f64::from(copies)).round() as u64;
                        assert_eq!(quote(PricingMode::PerPage, 0.0, &selection), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_per_item_ceils() {
        let selection = OrderSelection {
            paper_rate: 5.0,
            side_multiplier: 1.0,
            copy_count: 2,
            page_count: 0,
        };
        assert_eq!(quote(PricingMode::PerItem, 2.0, &selection), 20);

        let selection = OrderSelection {
            paper_rate: 1.0,
            side_multiplier: 1.6,
            copy_count: 1,
            page_count: 0,
        };
        // products that land exactly on an integer do not step up
        assert_eq!(quote(PricingMode::PerItem, 45.0, &selection), 72);
        assert_eq!(quote(PricingMode::PerItem, 2.5, &selection), 4);

        let selection = OrderSelection {
            side_multiplier: 1.1,
            ..selection
        };
        // 16.5 -> 17
        assert_eq!(quote(PricingMode::PerItem, 15.0, &selection), 17);
    }

    #[test]
    fn test_missing_inputs_fall_back() {
        let snapshot = recompute(&per_page("", "", "", 10), &options(), &sides());
        assert_eq!(snapshot.selection.paper_rate, 0.0);
        assert_eq!(snapshot.selection.side_multiplier, 1.0);
        assert_eq!(snapshot.selection.copy_count, 1);
        assert_eq!(snapshot.total, 0);
        // unmatched value mirrors the first option
        assert_eq!(snapshot.paper_label, "Black & White");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let inputs = per_page("10", "1.6", "4", 33);
        let first = recompute(&inputs, &options(), &sides());
        let second = recompute(&inputs, &options(), &sides());
        assert_eq!(first, second);
        assert_eq!(first.total, 2112);
        assert_eq!(first.side_label, "Double Sided");
    }

    #[test]
    fn test_per_item_uses_type_multiplier() {
        let types = vec![
            ChoiceOption::new("Black & White", "bw").with_multiplier(1.0),
            ChoiceOption::new("Color", "color").with_multiplier(5.0),
        ];
        let inputs = PricingInputs {
            mode: PricingMode::PerItem,
            base_rate: 45.0,
            paper_value: "color".to_string(),
            side_value: "1".to_string(),
            copies: "2".to_string(),
            page_count: 0,
        };
        let snapshot = recompute(&inputs, &types, &sides());
        assert_eq!(snapshot.total, 450);
        assert_eq!(snapshot.paper_label, "Color");

        // unknown type falls back to a neutral multiplier
        let inputs = PricingInputs {
            paper_value: "glossy".to_string(),
            ..inputs
        };
        assert_eq!(recompute(&inputs, &types, &sides()).total, 90);
    }

    #[test]
    fn test_selected_label_without_options() {
        assert_eq!(selected_label(&[], "1"), "");
    }
}
