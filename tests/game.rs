//! Game integration tests.

use std::collections::HashSet;

use bjcli::{
    Card, DEALER_NAME, DECK_SIZE, DealError, DealerPolicy, Deck, Decision, Event, Finish, Game,
    GameOptions, GameState, Hand, Outcome, Player, Rank, Role, RoundError, Scripted, Silent,
    Suit, Table, determine_winner,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(rank, Suit::Spades));
    }
    hand
}

/// Draw order is player, dealer, player, dealer, then hits.
fn stacked_game(draws: &[Rank]) -> Game {
    let cards: Vec<Card> = draws
        .iter()
        .zip(Suit::ALL.iter().cycle())
        .map(|(&rank, &suit)| card(rank, suit))
        .collect();
    Game::with_deck("Ada", Deck::stacked(&cards))
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Table for Recorder {
    fn show(&mut self, event: &Event<'_>) {
        let line = match *event {
            Event::InitialDeal => "initial deal".to_string(),
            Event::Hand { player, hide_first } => {
                let face = if hide_first { "hidden" } else { "shown" };
                format!("hand {} {face}", player.name())
            }
            Event::PlayerTurn { name } => format!("turn {name}"),
            Event::Drew { name, card } => format!("drew {name} {card}"),
            Event::Stood { name, value } => format!("stood {name} {value}"),
            Event::Busted { name, value } => format!("busted {name} {value}"),
            Event::DealerTurn => "dealer turn".to_string(),
            Event::Result(result) => format!("result {:?}", result.outcome),
        };
        self.events.push(line);
    }
}

#[test]
fn card_values_follow_rank() {
    let expected = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 1];
    for (rank, value) in Rank::ALL.into_iter().zip(expected) {
        assert_eq!(card(rank, Suit::Clubs).value(), value, "{rank}");
    }
}

#[test]
fn card_display_names_rank_and_suit() {
    assert_eq!(card(Rank::Queen, Suit::Hearts).to_string(), "Queen of Hearts");
    assert_eq!(card(Rank::Two, Suit::Clubs).to_string(), "Two of Clubs");
}

#[test]
fn hand_promotes_aces_while_total_is_eleven_or_less() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).value(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::King]).value(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Nine, Rank::Ace]).value(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace]).value(), 13);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ten, Rank::Ace]).value(), 12);
    assert_eq!(hand_of(&[Rank::King, Rank::Queen, Rank::Two]).value(), 22);
    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn hand_value_ignores_card_order() {
    let a = hand_of(&[Rank::Ace, Rank::Six, Rank::Five]);
    let b = hand_of(&[Rank::Five, Rank::Ace, Rank::Six]);
    assert_eq!(a.value(), 12);
    assert_eq!(a.value(), b.value());
}

#[test]
fn hand_blackjack_and_bust() {
    assert!(hand_of(&[Rank::Ace, Rank::Jack]).is_blackjack());
    assert!(!hand_of(&[Rank::Ace, Rank::Jack]).is_bust());
    assert!(hand_of(&[Rank::Ten, Rank::Nine, Rank::Three]).is_bust());
}

#[test]
fn concealed_display_keeps_value() {
    let mut hand = Hand::new();
    hand.add_card(card(Rank::King, Suit::Hearts));
    hand.add_card(card(Rank::Seven, Suit::Clubs));

    assert_eq!(
        hand.display(true).to_string(),
        "Hidden Card\nSeven of Clubs"
    );
    assert_eq!(
        hand.display(false).to_string(),
        "King of Hearts\nSeven of Clubs"
    );
    assert_eq!(hand.value(), 17);
    assert_eq!(hand.visible_value(), 7);
}

#[test]
fn deck_holds_every_card_once() {
    let mut deck = Deck::from_seed(3);
    assert_eq!(deck.remaining(), DECK_SIZE);

    let mut seen = HashSet::new();
    for dealt in 1..=DECK_SIZE {
        let card = deck.deal().unwrap();
        assert!(seen.insert(card), "{card} dealt twice");
        assert_eq!(deck.dealt(), dealt);
        assert_eq!(deck.dealt() + deck.remaining(), DECK_SIZE);
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.deal().unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn same_seed_same_order() {
    let mut a = Deck::from_seed(99);
    let mut b = Deck::from_seed(99);
    let a: Vec<Card> = (0..DECK_SIZE).map(|_| a.deal().unwrap()).collect();
    let b: Vec<Card> = (0..DECK_SIZE).map(|_| b.deal().unwrap()).collect();
    assert_eq!(a, b);
}

#[test]
fn stacked_deck_deals_in_order() {
    let draws = [card(Rank::Ace, Suit::Spades), card(Rank::Two, Suit::Hearts)];
    let mut deck = Deck::stacked(&draws);
    assert_eq!(deck.deal().unwrap(), draws[0]);
    assert_eq!(deck.deal().unwrap(), draws[1]);
    assert_eq!(deck.deal().unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn winner_from_totals() {
    assert_eq!(determine_winner(22, 20), Outcome::DealerWins);
    assert_eq!(determine_winner(20, 22), Outcome::PlayerWins);
    assert_eq!(determine_winner(20, 19), Outcome::PlayerWins);
    assert_eq!(determine_winner(18, 18), Outcome::Push);
    assert_eq!(determine_winner(17, 19), Outcome::DealerWins);
    assert_eq!(determine_winner(23, 25), Outcome::DealerWins);
}

#[test]
fn hit_on_empty_deck_leaves_hand_alone() {
    let mut deck = Deck::stacked(&[]);
    let mut player = Player::new("Ada");
    assert_eq!(player.hit(&mut deck).unwrap_err(), DealError::EmptyDeck);
    assert!(player.hand().is_empty());
}

#[test]
fn dealer_identity_and_stand() {
    let mut dealer = Player::dealer();
    assert_eq!(dealer.name(), DEALER_NAME);
    assert_eq!(dealer.role(), Role::Dealer);
    assert_eq!(Player::new("Ada").role(), Role::Human);

    let mut deck = Deck::stacked(&[card(Rank::Ten, Suit::Clubs), card(Rank::Eight, Suit::Clubs)]);
    dealer.hit(&mut deck).unwrap();
    dealer.hit(&mut deck).unwrap();
    assert!(!dealer.has_stood());
    assert_eq!(dealer.stand(), 18);
    assert!(dealer.has_stood());
}

#[test]
fn decision_parsing() {
    assert_eq!(Decision::parse("hit"), Some(Decision::Hit));
    assert_eq!(Decision::parse(" Stand \n"), Some(Decision::Stand));
    assert_eq!(Decision::parse("STAND"), Some(Decision::Stand));
    assert_eq!(Decision::parse("h"), None);
    assert_eq!(Decision::parse("hit me"), None);
    assert_eq!(Decision::parse(""), None);
}

#[test]
fn dealer_policy_threshold() {
    for value in 0..17 {
        assert_eq!(DealerPolicy::decision_for(value), Decision::Hit, "{value}");
    }
    for value in 17..=30 {
        assert_eq!(DealerPolicy::decision_for(value), Decision::Stand, "{value}");
    }
}

#[test]
fn player_blackjack_ends_round_after_deal() {
    let mut game = stacked_game(&[
        Rank::Ace,
        Rank::Nine,
        Rank::King,
        Rank::Seven,
        Rank::Two,
        Rank::Three,
    ]);
    let mut strategy = Scripted::new([Decision::Hit]);

    let result = game.play(&mut strategy, &mut Silent).unwrap();

    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.finish, Finish::Blackjack);
    assert_eq!(result.player_value, 21);
    assert_eq!(result.dealer_value, 16);
    assert_eq!(result.message(), "Ada wins with a Blackjack!");
    assert_eq!(strategy.asked(), 0);
    assert_eq!(game.cards_dealt(), 4);
    assert_eq!(game.cards_remaining(), 2);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn dealer_blackjack_wins_immediately() {
    let mut game = stacked_game(&[Rank::Nine, Rank::Ace, Rank::Seven, Rank::King]);
    let result = game.play(&mut Scripted::default(), &mut Silent).unwrap();

    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.finish, Finish::Blackjack);
    assert_eq!(result.message(), "Dealer wins with a Blackjack!");
}

#[test]
fn double_blackjack_is_a_push() {
    let mut game = stacked_game(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);
    let result = game.play(&mut Scripted::default(), &mut Silent).unwrap();

    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.finish, Finish::Blackjack);
    assert_eq!(
        result.message(),
        "It's a push! Both player and dealer have Blackjack!"
    );
}

#[test]
fn seventeen_each_is_a_draw() {
    let mut game = stacked_game(&[Rank::Ten, Rank::Nine, Rank::Seven, Rank::Eight]);
    let mut table = Recorder::default();
    let result = game
        .play(&mut Scripted::new([Decision::Stand]), &mut table)
        .unwrap();

    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.finish, Finish::Comparison);
    assert_eq!(result.message(), "Game is a Draw!");
    assert_eq!(game.cards_dealt(), 4);
    assert!(game.player().has_stood());
    assert!(game.dealer().has_stood());
    assert_eq!(
        table.events,
        [
            "initial deal",
            "hand Dealer hidden",
            "hand Ada shown",
            "turn Ada",
            "stood Ada 17",
            "dealer turn",
            "hand Dealer shown",
            "stood Dealer 17",
            "result Push",
        ]
    );
}

#[test]
fn player_bust_skips_dealer_draws() {
    let mut game = stacked_game(&[
        Rank::Ten,
        Rank::Nine,
        Rank::Six,
        Rank::Eight,
        Rank::King,
        Rank::Two,
    ]);
    let mut table = Recorder::default();
    let result = game
        .play(&mut Scripted::new([Decision::Hit]), &mut table)
        .unwrap();

    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.finish, Finish::PlayerBust);
    assert_eq!(result.player_value, 26);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
    assert!(table.events.contains(&"busted Ada 26".to_string()));
    assert!(!table.events.contains(&"dealer turn".to_string()));
}

#[test]
fn dealer_draws_below_seventeen_and_can_bust() {
    let mut game = stacked_game(&[
        Rank::Ten,
        Rank::Two,
        Rank::Nine,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Two,
        Rank::Ten,
        Rank::Ace,
    ]);
    let result = game
        .play(&mut Scripted::new([Decision::Stand]), &mut Silent)
        .unwrap();

    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.finish, Finish::DealerBust);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(game.dealer().hand().len(), 6);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn dealer_ignores_the_player_strategy() {
    let mut game = stacked_game(&[
        Rank::Ten,
        Rank::Two,
        Rank::Nine,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Two,
        Rank::Ten,
    ]);
    let mut strategy = Scripted::new([Decision::Stand, Decision::Stand, Decision::Stand]);

    let result = game.play(&mut strategy, &mut Silent).unwrap();

    assert_eq!(strategy.asked(), 1);
    assert_eq!(game.dealer().role(), Role::Dealer);
    assert_eq!(result.finish, Finish::DealerBust);
    assert_eq!(result.dealer_value, 26);
    assert!(game.dealer().hand().is_bust());
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut game = stacked_game(&[Rank::Ten, Rank::Ace, Rank::Eight, Rank::Six, Rank::Two]);
    let result = game
        .play(&mut Scripted::new([Decision::Stand]), &mut Silent)
        .unwrap();

    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.finish, Finish::Comparison);
    assert_eq!(game.dealer().hand().len(), 2);
}

#[test]
fn player_is_not_asked_again_at_twenty_one() {
    let mut game = stacked_game(&[
        Rank::Five,
        Rank::Nine,
        Rank::Six,
        Rank::Eight,
        Rank::Ten,
        Rank::Two,
    ]);
    let mut strategy = Scripted::new([Decision::Hit, Decision::Hit]);
    let result = game.play(&mut strategy, &mut Silent).unwrap();

    assert_eq!(strategy.asked(), 1);
    assert_eq!(result.player_value, 21);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert!(!game.player().has_stood());
}

#[test]
fn deck_exhaustion_aborts_the_deal() {
    let mut game = stacked_game(&[Rank::Two, Rank::Three, Rank::Four]);
    let err = game.play(&mut Scripted::default(), &mut Silent).unwrap_err();

    assert_eq!(err, RoundError::DeckExhausted(DealError::EmptyDeck));
    assert_eq!(game.state(), GameState::Aborted);
    assert!(game.state().is_terminal());
}

#[test]
fn deck_exhaustion_aborts_player_hit() {
    let mut game = stacked_game(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Eight]);
    let err = game
        .play(&mut Scripted::new([Decision::Hit]), &mut Silent)
        .unwrap_err();

    assert_eq!(err, RoundError::DeckExhausted(DealError::EmptyDeck));
    assert_eq!(game.state(), GameState::Aborted);
    assert_eq!(game.player().hand().len(), 2);
}

#[test]
fn deck_exhaustion_aborts_dealer_turn() {
    let mut game = stacked_game(&[Rank::Ten, Rank::Two, Rank::Nine, Rank::Three]);
    let err = game
        .play(&mut Scripted::new([Decision::Stand]), &mut Silent)
        .unwrap_err();

    assert_eq!(err, RoundError::DeckExhausted(DealError::EmptyDeck));
    assert_eq!(game.state(), GameState::Aborted);
}

#[test]
fn closed_input_aborts_round() {
    let mut game = stacked_game(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Eight]);
    let err = game.play(&mut Scripted::default(), &mut Silent).unwrap_err();

    assert_eq!(err, RoundError::InputClosed);
    assert_eq!(game.state(), GameState::Aborted);
}

#[test]
fn steps_reject_wrong_state() {
    let mut game = stacked_game(&[Rank::Ten, Rank::Nine, Rank::Seven, Rank::Eight]);
    assert_eq!(game.dealer_turn(&mut Silent).unwrap_err(), RoundError::InvalidState);
    assert_eq!(
        game.player_turn(&mut Scripted::default(), &mut Silent).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(
        game.check_immediate_blackjack(&mut Silent).unwrap_err(),
        RoundError::InvalidState
    );

    game.play(&mut Scripted::new([Decision::Stand]), &mut Silent)
        .unwrap();
    assert_eq!(
        game.play(&mut Scripted::default(), &mut Silent).unwrap_err(),
        RoundError::InvalidState
    );
}

#[test]
fn steps_can_be_driven_one_at_a_time() {
    let mut game = stacked_game(&[Rank::Ten, Rank::Nine, Rank::Seven, Rank::Eight]);

    game.deal_initial_cards(&mut Silent).unwrap();
    assert_eq!(game.state(), GameState::ImmediateBlackjackCheck);
    assert_eq!(game.participant(Role::Human).hand().len(), 2);
    assert_eq!(game.participant(Role::Dealer).hand().len(), 2);

    assert!(game.check_immediate_blackjack(&mut Silent).unwrap().is_none());
    assert_eq!(game.state(), GameState::PlayerTurn);

    let stand = &mut Scripted::new([Decision::Stand]);
    assert!(game.player_turn(stand, &mut Silent).unwrap().is_none());
    assert_eq!(game.state(), GameState::DealerTurn);

    let result = game.dealer_turn(&mut Silent).unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn seeded_rounds_replay_exactly() {
    let play = |seed| {
        let mut game = Game::new("Ada", seed);
        game.play(&mut Scripted::new([Decision::Stand]), &mut Silent)
            .unwrap()
    };
    assert_eq!(play(11), play(11));

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let game = Game::with_rng("Ada", &mut rng);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.state(), GameState::Setup);
}

#[test]
fn options_builder_and_overrides() {
    let options = GameOptions::default();
    assert_eq!(options.seed, None);
    assert!(options.clear_screen);

    let options = GameOptions::default()
        .with_seed(Some(3))
        .with_clear_screen(false);
    assert_eq!(options.seed, Some(3));
    assert!(!options.clear_screen);

    let options = GameOptions::default().with_overrides(|key| match key {
        "BLACKJACK_SEED" => Some("not a number".into()),
        "BLACKJACK_CLEAR" => Some(" Off ".into()),
        _ => None,
    });
    assert_eq!(options.seed, None);
    assert!(!options.clear_screen);
}
