/// Result of a single-record query.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

/// Result of a multi-record query. `Empty` is a valid answer, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Rows(Vec<T>),
    Empty,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Rows(rows) => rows,
            Listing::Empty => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Rows(rows) => rows.len(),
            Listing::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Listing::Empty
        } else {
            Listing::Rows(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vec_becomes_empty_listing() {
        let listing: Listing<u8> = Vec::new().into();
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
        assert!(listing.into_vec().is_empty());

        let listing: Listing<u8> = vec![1, 2].into();
        assert_eq!(listing, Listing::Rows(vec![1, 2]));
    }

    #[test]
    fn rows_without_records_count_as_empty() {
        let listing: Listing<u8> = Listing::Rows(Vec::new());
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn option_maps_onto_lookup() {
        assert_eq!(Lookup::from(Some(3)), Lookup::Found(3));
        assert_eq!(Lookup::<u8>::from(None), Lookup::NotFound);
    }
}
