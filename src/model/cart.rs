use crate::model::normalize_garment;

/// Garment quantities submitted with a new order, in the order they were entered.
///
/// Quantities are signed because they arrive straight from a form; lines with
/// a quantity of zero or less are dropped when the order is priced. Setting
/// the same garment twice replaces the earlier quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<(String, i64)>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, garment_type: impl Into<String>, quantity: i64) -> Self {
        self.set(garment_type, quantity);
        self
    }

    pub fn set(&mut self, garment_type: impl Into<String>, quantity: i64) {
        let garment_type = garment_type.into();
        let key = normalize_garment(&garment_type);
        match self
            .lines
            .iter_mut()
            .find(|(existing, _)| normalize_garment(existing) == key)
        {
            Some(line) => line.1 = quantity,
            None => self.lines.push((garment_type, quantity)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.lines.iter().map(|(g, q)| (g.as_str(), *q))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Cart {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for (garment_type, quantity) in iter {
            cart.set(garment_type, quantity);
        }
        cart
    }
}
