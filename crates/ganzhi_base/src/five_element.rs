//! Five-element balance of a chart: tally, day-master strength, and the
//! favorable / unfavorable element sets.
//!
//! Relative to the day-master (DM):
//! - resource = element generating DM
//! - output   = element DM generates
//! - wealth   = element DM restrains
//! - officer  = element restraining DM
//!
//! help = DM + resource, drain = output + wealth + officer.
//! A strong DM favors the draining triad; a weak DM favors the supporting duo.

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::Chart;

/// Count of observed symbols per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    /// Count for one element.
    pub const fn get(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Add one observation.
    pub fn add(&mut self, element: Element) {
        self.counts[element.index() as usize] += 1;
    }

    /// Total observations (8 for a chart with an hour pillar, 6 without).
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Elements with a zero count, in generating order.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.get(e) == 0)
            .collect()
    }

    /// `(element, count)` pairs in generating order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }
}

/// Day-master strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Strong,
    Weak,
}

impl Strength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "身强",
            Self::Weak => "身弱",
        }
    }
}

/// Full five-element analysis of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementAnalysis {
    pub tally: ElementTally,
    /// Element of the day stem.
    pub day_master: Element,
    pub strength: Strength,
    /// Supporting score (DM + resource).
    pub help: u8,
    /// Draining score (output + wealth + officer).
    pub drain: u8,
    pub favorable: Vec<Element>,
    pub unfavorable: Vec<Element>,
}

/// Tally every stem and branch of the chart with weight 1.
pub fn tally_elements(chart: &Chart) -> ElementTally {
    let mut tally = ElementTally::default();
    for p in chart.pillars() {
        tally.add(p.stem.element());
        tally.add(p.branch.element());
    }
    tally
}

/// Analyze the five-element balance of a chart.
pub fn analyze_elements(chart: &Chart) -> ElementAnalysis {
    let tally = tally_elements(chart);
    let dm = chart.day.stem.element();

    let resource = dm.generated_by();
    let output = dm.generates();
    let wealth = dm.restrains();
    let officer = dm.restrained_by();

    let help = tally.get(dm) + tally.get(resource);
    let drain = tally.get(output) + tally.get(wealth) + tally.get(officer);

    let supporting = vec![dm, resource];
    let draining = vec![output, wealth, officer];

    let (strength, favorable, unfavorable) = if help >= drain {
        (Strength::Strong, draining, supporting)
    } else {
        (Strength::Weak, supporting, draining)
    };

    ElementAnalysis {
        tally,
        day_master: dm,
        strength,
        help,
        drain,
        favorable,
        unfavorable,
    }
}
