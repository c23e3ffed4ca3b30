/// One of the four suits. The discriminant is the suit's offset inside
/// each rank nibble of a [`Hand`](super::Hand) bitstring.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    /// Glyph used when cards are shown in chat.
    pub const fn symbol(&self) -> char {
        match self {
            Self::Club => '♣',
            Self::Diamond => '♦',
            Self::Heart => '♥',
            Self::Spade => '♠',
        }
    }
    pub const fn is_red(&self) -> bool {
        matches!(self, Self::Diamond | Self::Heart)
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Club,
            1 => Self::Diamond,
            2 => Self::Heart,
            3 => Self::Spade,
            _ => panic!("no suit for {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// every card of this suit in a Hand bitstring
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x1111111111111 << u8::from(s)
    }
}

impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Self::Club),
            'd' | '♦' => Ok(Self::Diamond),
            'h' | '♥' => Ok(Self::Heart),
            's' | '♠' => Ok(Self::Spade),
            _ => Err(anyhow::anyhow!("not a suit: {}", c)),
        }
    }
}

/// `{}` gives the letter, `{:#}` the glyph.
impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if f.alternate() {
            return write!(f, "{}", self.symbol());
        }
        let letter = match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        };
        write!(f, "{}", letter)
    }
}
