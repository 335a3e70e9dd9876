/// Undirected edge in canonical form, smaller endpoint first.
pub type Edge = (u32, u32);

/// Puts an endpoint pair into canonical `u < v` order.
pub fn canonical(u: u32, v: u32) -> Edge {
    if u < v { (u, v) } else { (v, u) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_orders_endpoints() {
        assert_eq!(canonical(3, 1), (1, 3));
        assert_eq!(canonical(1, 3), (1, 3));
    }
}
