// src/domain/user/search.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Optional interval over `created_at`. Either bound may be absent; a range
/// with both bounds absent matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> DomainResult<Self> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(DomainError::Validation(format!(
                    "date range start ({from}) must not be after its end ({to})"
                )));
            }
        }
        Ok(Self { from, to })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Inclusive containment on whichever bounds are present. An absent
    /// timestamp is never contained, even by an empty range.
    pub fn contains(&self, at: Option<DateTime<Utc>>) -> bool {
        let Some(at) = at else {
            return false;
        };
        match (self.from, self.to) {
            (None, None) => true,
            (Some(from), None) => at >= from,
            (None, Some(to)) => at <= to,
            (Some(from), Some(to)) => at >= from && at <= to,
        }
    }
}

/// Composite filter for the user search. Absent fields impose no constraint;
/// blank strings are kept as given but count as absent.
#[derive(Debug, Clone, Default)]
pub struct UserSearchCondition {
    pub email: Option<String>,
    pub name: Option<String>,
    pub date_range: DateRange,
}

impl UserSearchCondition {
    pub fn new(
        email: Option<String>,
        name: Option<String>,
        date_range: DateRange,
    ) -> Self {
        Self {
            email,
            name,
            date_range,
        }
    }

    /// Builds a condition from raw range bounds, inheriting the validation
    /// failure of [`DateRange::new`].
    pub fn with_bounds(
        email: Option<String>,
        name: Option<String>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        Ok(Self::new(email, name, DateRange::new(from, to)?))
    }

    pub fn email_filter(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    pub fn name_filter(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.email_filter().is_none()
            && self.name_filter().is_none()
            && self.date_range.is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Offset pagination request. List queries refuse to run without one, so the
/// constructor is the single place the bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::Validation(
                "page size must be at least 1".into(),
            ));
        }
        if size > MAX_PAGE_SIZE {
            return Err(DomainError::Validation(format!(
                "page size must be at most {MAX_PAGE_SIZE}"
            )));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A slice of a result set plus the total number of matches, so pagination
/// controls can be rendered without a second round trip.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            size: request.size(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}
