/// Ticket offer shown on the page. Only the early bird price is sold online;
/// the regular price is announced in the notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketOffer {
    pub price_usd: u32,
    pub regular_price_usd: u32,
}

pub const EARLY_BIRD: TicketOffer = TicketOffer {
    price_usd: 8,
    regular_price_usd: 10,
};

impl TicketOffer {
    pub fn headline(self) -> &'static str {
        "EARLY BIRD SPECIAL"
    }

    pub fn price_line(self) -> String {
        format!("Early Bird Special: ${} per person", self.price_usd)
    }

    pub fn notice(self) -> String {
        format!(
            "Price increases to ${} after June 30th, 2025",
            self.regular_price_usd
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_bird_copy_is_fixed() {
        assert_eq!(EARLY_BIRD.headline(), "EARLY BIRD SPECIAL");
        assert_eq!(EARLY_BIRD.price_line(), "Early Bird Special: $8 per person");
        assert_eq!(EARLY_BIRD.notice(), "Price increases to $10 after June 30th, 2025");
    }
}
