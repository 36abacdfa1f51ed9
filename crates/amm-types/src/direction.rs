/// Which side of the book an order sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    Buy,
    Sell
}

impl std::fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell")
        }
    }
}

impl OrderDirection {
    pub fn is_buy(self) -> bool {
        matches!(self, Self::Buy)
    }

    pub fn is_sell(self) -> bool {
        matches!(self, Self::Sell)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy
        }
    }
}
