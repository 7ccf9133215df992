// src/application/cursor.rs
use rand::Rng;

use crate::domain::DomainError;

/// Uniformly random index into a collection of `count` quotes.
pub fn random(count: usize) -> Result<usize, DomainError> {
    random_with(&mut rand::rng(), count)
}

pub fn random_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<usize, DomainError> {
    if count == 0 {
        return Err(DomainError::NoQuotes);
    }
    Ok(rng.random_range(0..count))
}

pub fn next(current: usize, count: usize) -> Result<usize, DomainError> {
    if count == 0 {
        return Err(DomainError::NoQuotes);
    }
    Ok((current + 1) % count)
}

pub fn previous(current: usize, count: usize) -> Result<usize, DomainError> {
    if count == 0 {
        return Err(DomainError::NoQuotes);
    }
    Ok((current % count + count - 1) % count)
}

/// Position of the quote currently shown while browsing the full collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseCursor {
    current: Option<usize>,
}

impl BrowseCursor {
    pub fn at(index: usize) -> Self {
        Self {
            current: Some(index),
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn random(&mut self, count: usize) -> Result<usize, DomainError> {
        let index = random(count)?;
        self.current = Some(index);
        Ok(index)
    }

    /// Step forward; starts at the first quote when nothing is shown yet.
    pub fn next(&mut self, count: usize) -> Result<usize, DomainError> {
        let index = match self.current {
            Some(current) => next(current, count)?,
            None if count == 0 => return Err(DomainError::NoQuotes),
            None => 0,
        };
        self.current = Some(index);
        Ok(index)
    }

    /// Step backward; starts at the last quote when nothing is shown yet.
    pub fn previous(&mut self, count: usize) -> Result<usize, DomainError> {
        let index = match self.current {
            Some(current) => previous(current, count)?,
            None if count == 0 => return Err(DomainError::NoQuotes),
            None => count - 1,
        };
        self.current = Some(index);
        Ok(index)
    }
}
