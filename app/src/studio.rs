// src/studio.rs
//
// Read-only studio data. Pages only see the `StudioData` trait; the mock
// tables ship inside the binary as JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::calendar::DateKey;

const MOCK_JSON: &str = include_str!("../data/studio.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub class_name: String,
    pub instructor: String,
    pub spots: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCard {
    pub name: String,
    pub price: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub price: String,
    pub perks: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Completed,
    Upcoming,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BookingStatus::Completed => "Completed",
            BookingStatus::Upcoming => "Upcoming",
            BookingStatus::Cancelled => "Cancelled",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub date: DateKey,
    pub time: String,
    pub class_name: String,
    pub instructor: String,
    pub status: BookingStatus,
    pub credits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Processed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Processed => "Processed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: DateKey,
    pub kind: String,
    pub description: String,
    pub amount: String,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn is_refund(&self) -> bool {
        self.amount.trim_start().starts_with('-')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub member_since: String,
    pub remaining_credits: u32,
    pub total_credits: u32,
    pub plan: String,
}

/// Fetch-by-key view over the studio's reference data.
pub trait StudioData {
    fn schedule_for(&self, date: &DateKey) -> &[ScheduleEntry];
    fn classes(&self) -> &[ClassCard];
    fn packages(&self) -> &[Package];
    fn time_slots(&self) -> &[String];
    fn bookings(&self) -> &[Booking];
    fn transactions(&self) -> &[Transaction];
    fn profile(&self) -> &UserProfile;
    /// Whether `date` has a schedule entry at all, even an empty one.
    fn has_schedule(&self, date: &DateKey) -> bool;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockStudio {
    profile: UserProfile,
    classes: Vec<ClassCard>,
    packages: Vec<Package>,
    schedule: BTreeMap<DateKey, Vec<ScheduleEntry>>,
    time_slots: Vec<String>,
    bookings: Vec<Booking>,
    transactions: Vec<Transaction>,
}

impl MockStudio {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn builtin() -> Result<Self, serde_json::Error> {
        Self::from_json(MOCK_JSON)
    }
}

impl StudioData for MockStudio {
    fn schedule_for(&self, date: &DateKey) -> &[ScheduleEntry] {
        self.schedule.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    fn has_schedule(&self, date: &DateKey) -> bool {
        self.schedule.contains_key(date)
    }

    fn classes(&self) -> &[ClassCard] {
        &self.classes
    }

    fn packages(&self) -> &[Package] {
        &self.packages
    }

    fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn profile(&self) -> &UserProfile {
        &self.profile
    }
}

/// Shared handle handed down through a Yew context.
#[derive(Clone)]
pub struct Studio(Rc<dyn StudioData>);

impl Studio {
    pub fn new(data: impl StudioData + 'static) -> Self {
        Studio(Rc::new(data))
    }
}

impl std::ops::Deref for Studio {
    type Target = dyn StudioData;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for Studio {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{build_grid, YearMonth};
    use pretty_assertions::assert_eq;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn builtin_tables_load() {
        let studio = MockStudio::builtin().unwrap();
        assert_eq!(studio.classes().len(), 8);
        assert_eq!(studio.packages().len(), 3);
        assert_eq!(studio.packages().iter().filter(|p| p.highlighted).count(), 1);
        assert_eq!(studio.time_slots().len(), 9);
        assert_eq!(studio.profile().remaining_credits, 12);
        assert_eq!(studio.bookings().len(), 4);
        assert_eq!(studio.transactions().len(), 4);
    }

    #[test]
    fn schedule_lookup_by_key() {
        let studio = MockStudio::builtin().unwrap();
        let monday = studio.schedule_for(&key("2024-01-15"));
        assert_eq!(monday.len(), 3);
        assert_eq!(monday[1].class_name, "Pilates Reformer");
        assert!(studio.has_schedule(&key("2024-01-17")));
        assert!(studio.schedule_for(&key("2024-01-20")).is_empty());
        assert!(!studio.has_schedule(&key("2024-01-20")));
    }

    #[test]
    fn empty_schedule_days_still_count_as_scheduled() {
        let mut value: serde_json::Value = serde_json::from_str(MOCK_JSON).unwrap();
        value["schedule"]["2024-01-20"] = serde_json::json!([]);
        let studio = MockStudio::from_json(&value.to_string()).unwrap();

        let day20 = key("2024-01-20");
        assert!(studio.has_schedule(&day20));
        assert!(studio.schedule_for(&day20).is_empty());

        let cells = build_grid(YearMonth::new(2024, 1).unwrap(), |k| studio.has_schedule(k), None);
        let cell = |d: u32| cells.iter().find(|c| c.day == Some(d)).unwrap();
        assert!(cell(20).has_entries);
        assert!(cell(15).has_entries);
        assert!(!cell(21).has_entries);
    }

    #[test]
    fn refunds_are_negative_amounts() {
        let studio = MockStudio::builtin().unwrap();
        let refunds: Vec<_> = studio
            .transactions()
            .iter()
            .filter(|t| t.is_refund())
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(refunds, vec!["TXN004"]);
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = Studio::new(MockStudio::builtin().unwrap());
        let b = Studio::new(MockStudio::builtin().unwrap());
        assert!(a == a.clone());
        assert!(a != b);
        assert_eq!(a.profile().name, "Sarah Johnson");
    }

    #[test]
    fn rejects_malformed_schedule_keys() {
        let mut value: serde_json::Value = serde_json::from_str(MOCK_JSON).unwrap();
        value["schedule"] = serde_json::json!({ "next tuesday": [] });
        assert!(MockStudio::from_json(&value.to_string()).is_err());
    }
}
