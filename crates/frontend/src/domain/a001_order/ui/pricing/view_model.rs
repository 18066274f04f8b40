use contracts::domain::a001_order::{recompute, PriceSnapshot, PricingInputs, PricingMode};
use contracts::domain::a002_service::{ChoiceOption, ServiceCatalog};
use leptos::prelude::*;

/// Pricing form state. Every control change recomputes one snapshot; the
/// visible total, the hidden total and the hidden labels all read from it.
#[derive(Clone, Copy)]
pub struct PricingViewModel {
    pub paper_options: StoredValue<Vec<ChoiceOption>>,
    pub side_options: StoredValue<Vec<ChoiceOption>>,
    pub paper: RwSignal<String>,
    pub side: RwSignal<String>,
    pub copies: RwSignal<String>,
    pub snapshot: Memo<PriceSnapshot>,
}

impl PricingViewModel {
    pub fn new(
        mode: PricingMode,
        catalog: &ServiceCatalog,
        base_rate: Signal<f64>,
        page_count: Signal<u32>,
    ) -> Self {
        let paper_options = catalog.paper_options(mode).to_vec();
        let side_options = catalog.side_options().to_vec();

        let paper = RwSignal::new(first_value(&paper_options));
        let side = RwSignal::new(first_value(&side_options));
        let copies = RwSignal::new("1".to_string());

        let (papers, sides) = (paper_options.clone(), side_options.clone());
        let snapshot = Memo::new(move |_| {
            let inputs = PricingInputs {
                mode,
                base_rate: base_rate.get(),
                paper_value: paper.get(),
                side_value: side.get(),
                copies: copies.get(),
                page_count: page_count.get(),
            };
            recompute(&inputs, &papers, &sides)
        });

        Self {
            paper_options: StoredValue::new(paper_options),
            side_options: StoredValue::new(side_options),
            paper,
            side,
            copies,
            snapshot,
        }
    }

    pub fn total(&self) -> u64 {
        self.snapshot.with(|s| s.total)
    }

    pub fn paper_label(&self) -> String {
        self.snapshot.with(|s| s.paper_label.clone())
    }

    pub fn side_label(&self) -> String {
        self.snapshot.with(|s| s.side_label.clone())
    }
}

fn first_value(options: &[ChoiceOption]) -> String {
    options.first().map(|o| o.value.clone()).unwrap_or_default()
}
