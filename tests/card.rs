//! Card, suit, and rank integration tests.

use cardeck::{Card, MAX_RANK, ParseCardError, Rank, RankError, Suit};

#[test]
fn card_display_names() {
    assert_eq!(Card::new(Suit::Heart, Rank::Ace).to_string(), "Ace of Hearts");
    assert_eq!(Card::new(Suit::Spade, Rank::Two).to_string(), "Two of Spades");
    assert_eq!(
        Card::new(Suit::Diamond, Rank::Nine).to_string(),
        "Nine of Diamonds"
    );
    assert_eq!(Card::new(Suit::Club, Rank::Jack).to_string(), "Jack of Clubs");
}

#[test]
fn joker_display_ignores_index() {
    assert_eq!(Card::joker(0).to_string(), "Joker");
    assert_eq!(Card::joker(7).to_string(), "Joker");
    assert_eq!(Card::new(Suit::Joker, Rank::King).to_string(), "Joker");
}

#[test]
fn card_accessors() {
    let card = Card::new(Suit::Club, Rank::Queen);
    assert_eq!(card.suit(), Suit::Club);
    assert_eq!(card.rank(), Some(Rank::Queen));
    assert_eq!(card.joker_index(), None);
    assert!(!card.is_joker());

    let joker = Card::joker(3);
    assert_eq!(joker.suit(), Suit::Joker);
    assert_eq!(joker.rank(), None);
    assert_eq!(joker.joker_index(), Some(3));
    assert!(joker.is_joker());
}

#[test]
fn card_equality_is_structural() {
    assert_eq!(
        Card::new(Suit::Spade, Rank::Ten),
        Card::new(Suit::Spade, Rank::Ten)
    );
    assert_ne!(
        Card::new(Suit::Spade, Rank::Ten),
        Card::new(Suit::Heart, Rank::Ten)
    );
    assert_ne!(Card::joker(0), Card::joker(1));
}

#[test]
fn card_ordering_puts_jokers_last() {
    let spade_ace = Card::new(Suit::Spade, Rank::Ace);
    let spade_king = Card::new(Suit::Spade, Rank::King);
    let diamond_ace = Card::new(Suit::Diamond, Rank::Ace);
    let heart_king = Card::new(Suit::Heart, Rank::King);

    assert!(spade_ace < spade_king);
    assert!(spade_king < diamond_ace);
    assert!(heart_king < Card::joker(0));
    assert!(Card::joker(0) < Card::joker(1));
}

#[test]
fn rank_values_and_conversion() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::King.value(), MAX_RANK);
    assert_eq!(Rank::try_from(11), Ok(Rank::Jack));
    assert_eq!(Rank::try_from(0), Err(RankError::OutOfRange(0)));
    assert_eq!(Rank::try_from(14), Err(RankError::OutOfRange(14)));

    for (i, rank) in Rank::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(rank.value()), i + 1);
    }
}

#[test]
fn suit_colours() {
    assert!(Suit::Heart.is_red());
    assert!(Suit::Diamond.is_red());
    assert!(Suit::Spade.is_black());
    assert!(Suit::Club.is_black());
    assert!(!Suit::Joker.is_red());
    assert!(!Suit::Joker.is_black());
}

#[test]
fn parse_cards() {
    assert_eq!(
        "Ace of Hearts".parse::<Card>(),
        Ok(Card::new(Suit::Heart, Rank::Ace))
    );
    assert_eq!(
        "  Seven of Clubs ".parse::<Card>(),
        Ok(Card::new(Suit::Club, Rank::Seven))
    );
    assert_eq!("Joker".parse::<Card>(), Ok(Card::joker(0)));
    assert_eq!("Spades".parse::<Suit>(), Ok(Suit::Spade));
    assert_eq!("Heart".parse::<Suit>(), Ok(Suit::Heart));
    assert_eq!("Ten".parse::<Rank>(), Ok(Rank::Ten));
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("Ace".parse::<Card>(), Err(ParseCardError::MissingOf));
    assert_eq!(
        "One of Spades".parse::<Card>(),
        Err(ParseCardError::UnknownRank)
    );
    assert_eq!(
        "Ace of Stars".parse::<Card>(),
        Err(ParseCardError::UnknownSuit)
    );
    assert_eq!(
        "Ace of Jokers".parse::<Card>(),
        Err(ParseCardError::UnknownSuit)
    );
}

#[test]
fn parse_card_requires_display_form() {
    assert_eq!(
        "Ace of Spade".parse::<Card>(),
        Err(ParseCardError::UnknownSuit)
    );
    assert_eq!(
        "Ace of Spadess".parse::<Card>(),
        Err(ParseCardError::UnknownSuit)
    );
    assert_eq!("Jokers".parse::<Card>(), Err(ParseCardError::MissingOf));
}

#[test]
fn display_parses_back() {
    for suit in Suit::STANDARD {
        let card = Card::new(suit, Rank::Five);
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
}
