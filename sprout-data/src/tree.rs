//! The calendar tree: Root -> Year -> Season -> Day.
//!
//! The tree is complete and regular. Every covered year has four seasons of
//! 28 days each whether or not anything was recorded; missing data shows up
//! as a zero from the metric accessor, never as a missing node.

use sprout_core::{CalendarDate, DateRange, Season, DAYS_PER_SEASON, SEASONS_PER_YEAR};
use std::collections::BTreeSet;

/// Which years to cover.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum YearFilter {
    /// Every year from 1 through the current year
    All,
    Years(BTreeSet<u32>),
}

impl YearFilter {
    /// Year value that stands for "all years" in a selected-year list.
    pub const ALL_SENTINEL: u32 = 0;

    /// Interpret a list of selected years; a `0` anywhere selects all years.
    pub fn from_selected(years: &[u32]) -> YearFilter {
        if years.contains(&YearFilter::ALL_SENTINEL) {
            YearFilter::All
        } else {
            YearFilter::Years(years.iter().copied().collect())
        }
    }

    /// The covered years in ascending order.
    pub fn resolve(&self, current_year: u32) -> Vec<u32> {
        match self {
            YearFilter::All => (1..=current_year).collect(),
            YearFilter::Years(years) => years.iter().copied().collect(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DayNode {
    pub date: CalendarDate,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SeasonNode {
    pub year: u32,
    pub season: Season,
    pub days: Vec<DayNode>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct YearNode {
    pub year: u32,
    pub seasons: Vec<SeasonNode>,
}

/// Years are stored oldest first.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct RootNode {
    pub years: Vec<YearNode>,
}

/// Depth of a node below the root.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TreeLevel {
    Day,
    Season,
    Year,
}

/// A borrowed node of any kind.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Root(&'a RootNode),
    Year(&'a YearNode),
    Season(&'a SeasonNode),
    Day(&'a DayNode),
}

impl<'a> Node<'a> {
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Root(root) => root.years.iter().map(Node::Year).collect(),
            Node::Year(year) => year.seasons.iter().map(Node::Season).collect(),
            Node::Season(season) => season.days.iter().map(Node::Day).collect(),
            Node::Day(_) => Vec::new(),
        }
    }

    /// Number of day nodes at or below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Day(_) => 1,
            _ => self.children().iter().map(Node::leaf_count).sum(),
        }
    }
}

impl SeasonNode {
    pub fn build(year: u32, season: Season) -> SeasonNode {
        let days = DateRange::season(year, season)
            .map(|date| DayNode { date })
            .collect();
        SeasonNode { year, season, days }
    }
}

impl YearNode {
    pub fn build(year: u32) -> YearNode {
        let seasons = Season::ALL
            .into_iter()
            .map(|season| SeasonNode::build(year, season))
            .collect();
        YearNode { year, seasons }
    }
}

impl RootNode {
    /// Build the tree for `filter`; `current_year` bounds [`YearFilter::All`].
    ///
    /// Year 0 in an explicit list is not a real year and is skipped.
    pub fn build(filter: &YearFilter, current_year: u32) -> RootNode {
        let years = filter
            .resolve(current_year)
            .into_iter()
            .filter(|&year| year > 0)
            .map(YearNode::build)
            .collect();
        RootNode { years }
    }

    pub fn day_count(&self) -> usize {
        Node::Root(self).leaf_count()
    }

    /// Walk the tree bottom-up, handing each node its already-visited children.
    ///
    /// # Panics
    /// Panics if a year does not hold exactly four seasons of 28 days, which
    /// can only happen when the tree was assembled by hand.
    pub fn walk<V: CalendarVisitor>(&self, visitor: &mut V) -> V::Root {
        let years = self
            .years
            .iter()
            .map(|year| {
                assert_eq!(
                    year.seasons.len(),
                    SEASONS_PER_YEAR,
                    "year {} must have every season",
                    year.year
                );
                let seasons = year
                    .seasons
                    .iter()
                    .map(|season| {
                        assert_eq!(
                            season.days.len(),
                            DAYS_PER_SEASON as usize,
                            "{} of year {} must have every day",
                            season.season,
                            season.year
                        );
                        let days = season.days.iter().map(|day| visitor.visit_day(day)).collect();
                        visitor.visit_season(season, days)
                    })
                    .collect();
                visitor.visit_year(year, seasons)
            })
            .collect();
        visitor.visit_root(self, years)
    }
}

/// A post-order pass over the calendar tree.
///
/// Each `visit_*` receives the node plus the results of its children, in
/// calendar order.
pub trait CalendarVisitor {
    type Day;
    type Season;
    type Year;
    type Root;

    fn visit_day(&mut self, day: &DayNode) -> Self::Day;
    fn visit_season(&mut self, season: &SeasonNode, days: Vec<Self::Day>) -> Self::Season;
    fn visit_year(&mut self, year: &YearNode, seasons: Vec<Self::Season>) -> Self::Year;
    fn visit_root(&mut self, root: &RootNode, years: Vec<Self::Year>) -> Self::Root;
}
