use std::fmt::Write as _;

use crossword_core::Orientation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintItem {
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintListViewModel {
    pub orientation: Orientation,
    pub items: Vec<HintItem>,
}

impl HintListViewModel {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.orientation {
            Orientation::Down => "Down",
            Orientation::Across => "Across",
        }
    }
}

#[must_use]
pub fn render(vm: &HintListViewModel) -> String {
    let mut out = format!("{}\n", vm.title());
    for item in &vm.items {
        let _ = writeln!(out, "  {}. {}", item.number, item.text);
    }
    out
}
