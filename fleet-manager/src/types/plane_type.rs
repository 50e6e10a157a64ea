/// The categories planes are counted by.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlaneType {
    Jet,
    Propeller,
    Cargo,
    Military,
    Passenger,
}

impl PlaneType {
    /// Every category, in the order counts are reported.
    pub const ALL: [PlaneType; 5] = [
        PlaneType::Jet,
        PlaneType::Propeller,
        PlaneType::Cargo,
        PlaneType::Military,
        PlaneType::Passenger,
    ];

    /// Converts the `PlaneType` variant to the exact label a plane's type must match.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaneType::Jet => "Jet",
            PlaneType::Propeller => "Propeller",
            PlaneType::Cargo => "Cargo",
            PlaneType::Military => "Military",
            PlaneType::Passenger => "Passenger",
        }
    }

    /// The labels of every category, in reporting order.
    pub fn labels() -> Vec<&'static str> {
        PlaneType::ALL.iter().map(PlaneType::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_order() {
        assert_eq!(
            PlaneType::labels(),
            vec!["Jet", "Propeller", "Cargo", "Military", "Passenger"]
        );
    }
}
