// src/account.rs
use thiserror::Error;

use crate::studio::{Booking, BookingStatus, StudioData};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no booking with id {0}")]
    UnknownBooking(String),
    #[error("booking {id} is {status} and cannot be cancelled")]
    NotCancellable { id: String, status: BookingStatus },
}

/// Credits and bookings shown on the profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub remaining: u32,
    pub total: u32,
    pub bookings: Vec<Booking>,
}

impl Account {
    pub fn from_studio(data: &dyn StudioData) -> Self {
        let profile = data.profile();
        Self {
            remaining: profile.remaining_credits,
            total: profile.total_credits,
            bookings: data.bookings().to_vec(),
        }
    }

    /// Cancel an upcoming booking and refund its credits. Returns the refund.
    pub fn cancel(&mut self, id: &str) -> Result<u32, LedgerError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| LedgerError::UnknownBooking(id.to_string()))?;

        if booking.status != BookingStatus::Upcoming {
            return Err(LedgerError::NotCancellable {
                id: id.to_string(),
                status: booking.status,
            });
        }

        booking.status = BookingStatus::Cancelled;
        self.remaining = self.remaining.saturating_add(booking.credits);
        Ok(booking.credits)
    }

    pub fn used(&self) -> u32 {
        self.total.saturating_sub(self.remaining)
    }

    /// Fill of the credits bar, in [0, 1].
    pub fn remaining_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.remaining as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    pub fn find(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }
}
