use lastcard::{
    Card, CardColor, ColoredCard, Error, Game, GameParams, Randomizer, Shuffler,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn red(number: u8) -> Card {
    Card::Colored(CardColor::Red, ColoredCard::Number(number))
}

fn fixed_randomizer(value: usize) -> Randomizer {
    Box::new(move |_| value)
}

fn stack_deck(front: Vec<Card>) -> Shuffler {
    Box::new(move |cards: &mut Vec<Card>| {
        for (slot, want) in front.iter().enumerate() {
            let found = cards[slot..]
                .iter()
                .position(|card| card == want)
                .map(|offset| offset + slot)
                .expect("stacked card missing from deck");
            cards.swap(slot, found);
        }
    })
}

/// One-card hands with a stacked deck: player 0 always holds a playable
/// Red 5 and wins 9 points per hand (the Green 9 left with player 1).
fn scripted_game(target_score: u32) -> Game {
    Game::new(GameParams {
        players: vec!["Ana".to_string(), "Bo".to_string()],
        target_score,
        randomizer: fixed_randomizer(1),
        shuffler: stack_deck(vec![
            red(5),
            Card::Colored(CardColor::Green, ColoredCard::Number(9)),
            red(3),
        ]),
        cards_per_player: Some(1),
    })
    .unwrap()
}

#[test]
fn hands_repeat_until_the_target_score_is_reached() {
    init_tracing();
    let mut game = scripted_game(25);

    let mut hands_played = 0;
    while game.winner().is_none() {
        let hand = game.current_hand().expect("match still live");
        hand.play(0, None).unwrap();
        hands_played += 1;
        assert!(hands_played <= 10, "match should have ended by now");
    }

    assert_eq!(hands_played, 3);
    assert_eq!(game.winner(), Some(0));
    assert_eq!(game.score(0).unwrap(), 27);
    assert_eq!(game.score(1).unwrap(), 0);
    assert!(game.current_hand().is_none());
}

#[test]
fn scores_settle_the_moment_a_hand_ends() {
    let mut game = scripted_game(500);

    game.current_hand().unwrap().play(0, None).unwrap();

    // The winning play has been scored before the next hand is dealt.
    assert_eq!(game.score(0).unwrap(), 9);
    assert_eq!(game.winner(), None);

    // The next access swaps in a freshly dealt hand.
    let hand = game.current_hand().unwrap();
    assert!(!hand.has_ended());
    assert_eq!(hand.player_hand(0).unwrap().len(), 1);
}

#[test]
fn an_exact_target_hit_wins_the_match() {
    let mut game = scripted_game(9);
    game.current_hand().unwrap().play(0, None).unwrap();
    assert_eq!(game.winner(), Some(0));
    assert!(game.current_hand().is_none());
}

#[test]
fn default_match_deals_a_standard_hand() {
    let mut game = Game::new(GameParams::default()).unwrap();
    assert_eq!(game.player_count(), 2);
    assert_eq!(game.target_score(), 500);

    let hand = game.current_hand().unwrap();
    assert_eq!(hand.player_hand(0).unwrap().len(), 7);
    assert_eq!(hand.player_hand(1).unwrap().len(), 7);
}

#[test]
fn invalid_parameters_are_rejected() {
    assert_eq!(
        Game::new(GameParams {
            target_score: 0,
            ..GameParams::default()
        })
        .unwrap_err(),
        Error::InvalidTargetScore
    );
}
