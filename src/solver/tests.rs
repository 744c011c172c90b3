use super::*;
use crate::Arbitrary;
use crate::Utility;
use crate::profile::*;
use crate::tensor::*;

fn profiles(list: &[&[usize]]) -> Vec<Profile> {
    list.iter().map(|p| Profile::from(p.to_vec())).collect()
}

fn sequential() -> Options {
    Options::default().parallel(false)
}

/// utility of `player` after they alone deviate to `strategy`
fn deviation(tensor: &PayoffTensor, profile: &Profile, player: usize, strategy: usize) -> Utility {
    let mut deviant = profile.clone();
    deviant[player] = strategy;
    tensor.utility(&deviant, player)
}

/// PSNE straight from the definition: nobody gains by deviating alone
fn brute_psne(tensor: &PayoffTensor) -> Vec<Profile> {
    let shape = tensor.shape();
    shape
        .iter()
        .filter(|profile| {
            (0..shape.players()).all(|p| {
                (0..shape.strategies(p))
                    .all(|s| deviation(tensor, profile, p, s) <= tensor.utility(profile, p))
            })
        })
        .map(Profile::humanize)
        .collect()
}

/// per-player dominant strategies from an all-pairs scan over every profile
fn brute_candidates(tensor: &PayoffTensor) -> Vec<Vec<usize>> {
    let shape = tensor.shape();
    (0..shape.players())
        .map(|p| {
            let n = shape.strategies(p);
            (0..n)
                .filter(|&a| {
                    (0..n).all(|b| {
                        shape.iter().all(|profile| {
                            deviation(tensor, &profile, p, a) >= deviation(tensor, &profile, p, b)
                        })
                    })
                })
                .collect()
        })
        .collect()
}

fn brute_vwdse(tensor: &PayoffTensor) -> Vec<Profile> {
    Vwdse::product(&brute_candidates(tensor))
        .into_iter()
        .map(Profile::humanize)
        .collect()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn two_player_coordination() {
    let game = Game::new(vec![2, 2], vec![2, 2, 4, 6, 6, 4, 2, 2]).unwrap();
    assert!(game.list_psne().unwrap() == profiles(&[&[2, 1], &[1, 2]]));
    assert!(game.list_vwdse().unwrap().is_empty());
}

#[test]
fn three_player_dominant_corner() {
    let payoffs = vec![
        0, 0, 0, 1, 1, -1, -1, 1, 1, 0, 2, 0, //
        1, -1, 1, 2, 0, 0, 0, 0, 2, 1, 1, 1,
    ];
    let game = Game::new(vec![2, 2, 2], payoffs).unwrap();
    assert!(game.list_psne().unwrap() == profiles(&[&[2, 2, 2]]));
    assert!(game.list_vwdse().unwrap() == profiles(&[&[2, 2, 2]]));
}

#[test]
fn all_trivial_players() {
    for n in 1..=6 {
        let game = Game::new(vec![1; n], (1..=n as Utility).collect()).unwrap();
        let expected = vec![Profile::from(vec![1; n])];
        assert!(game.list_psne().unwrap() == expected);
        assert!(game.list_vwdse().unwrap() == expected);
    }
}

#[test]
fn missing_dominant_strategy_empties_vwdse() {
    let rows = [
        [[1, 5], [3, 4], [1, 1]], //
        [[2, 5], [2, 3], [3, 2]],
    ];
    let shape = Shape::new(vec![2, 3]).unwrap();
    let tensor = PayoffTensor::tabulate(shape, |p| rows[p[0]][p[1]].to_vec()).unwrap();
    let game = Game::try_from(tensor).unwrap();
    let candidates = Vwdse::from(game.tensor()).candidates(false);
    assert!(candidates == vec![vec![], vec![0]]);
    assert!(game.list_vwdse().unwrap().is_empty());
    assert!(game.list_psne().unwrap() == profiles(&[&[2, 1]]));
}

#[test]
fn three_by_two_flat_list() {
    let game = Game::new(vec![3, 2], vec![1, 1, 0, 2, 0, 2, 1, 1, 0, 3, 2, 0]).unwrap();
    assert!(game.list_psne().unwrap() == profiles(&[&[1, 1]]));
    assert!(game.list_vwdse().unwrap().is_empty());
}

#[test]
fn trivial_players_are_reinserted_in_place() {
    // player 2 has one strategy and sits between two real choices
    let shape = Shape::new(vec![2, 1, 2]).unwrap();
    let tensor = PayoffTensor::tabulate(shape, |p| {
        let agree = (p[0] == p[2]) as Utility;
        vec![agree, 7, agree]
    })
    .unwrap();
    let game = Game::try_from(tensor).unwrap();
    assert!(game.list_psne().unwrap() == profiles(&[&[1, 1, 1], &[2, 1, 2]]));
    assert!(game.list_vwdse().unwrap().is_empty());
}

#[test]
fn every_profile_of_a_constant_game_is_an_equilibrium() {
    // large enough to be split across several partitions
    let shape = Shape::new(vec![16, 16, 16, 8]).unwrap();
    assert!(shape.partitions(true).len() > 1 || rayon::current_num_threads() == 1);
    let game = Game::new(shape.counts().to_vec(), vec![3; shape.entries()]).unwrap();
    let psne = game.list_psne().unwrap();
    assert!(psne.len() == shape.profiles());
    assert!(psne.into_iter().eq(shape.iter().map(Profile::humanize)));
    assert!(game.list_vwdse().unwrap().len() == shape.profiles());
}

#[test]
fn oversized_best_response_table_fails_at_construction() {
    let shape = Shape::new(vec![2; 18]).unwrap();
    assert!(shape.profiles() <= crate::MAX_PROFILES);
    let game = Game::new(vec![2; 18], vec![0; shape.entries()]);
    assert!(matches!(game, Err(crate::Error::Overflow(_))));
    let shape = Shape::new(vec![2; 17]).unwrap();
    assert!(Game::new(vec![2; 17], vec![0; shape.entries()]).is_ok());
}

#[test]
fn many_trivial_players_without_compaction() {
    let game = Game::new(vec![1; 29], (1..=29).collect()).unwrap();
    let expected = vec![Profile::from(vec![1; 29])];
    for parallel in [true, false] {
        for compact in [true, false] {
            let options = Options::default().compact(compact).parallel(parallel);
            let game = game.clone().with_options(options);
            assert!(game.list_psne().unwrap() == expected);
            assert!(game.list_vwdse().unwrap() == expected);
        }
    }
}

#[test]
fn trivial_players_without_compaction_match_compacted() {
    let shape = Shape::new(vec![1, 3, 1, 1, 2, 1]).unwrap();
    for _ in 0..32 {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let tensor = PayoffTensor::tabulate(shape.clone(), |_| {
            (0..6).map(|_| rng.random_range(-2..=2)).collect()
        })
        .unwrap();
        let game = Game::try_from(tensor).unwrap();
        let plain = game.clone().with_options(Options::default().compact(false));
        assert!(game.list_psne().unwrap() == plain.list_psne().unwrap());
        assert!(game.list_vwdse().unwrap() == plain.list_vwdse().unwrap());
        assert!(plain.list_psne().unwrap() == brute_psne(plain.tensor()));
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn psne_matches_definition() {
    for _ in 0..128 {
        let game = Game::random();
        assert!(game.list_psne().unwrap() == brute_psne(game.tensor()));
    }
}

#[test]
fn vwdse_matches_definition() {
    for _ in 0..128 {
        let game = Game::random();
        assert!(game.list_vwdse().unwrap() == brute_vwdse(game.tensor()));
    }
}

#[test]
fn compaction_changes_nothing() {
    for _ in 0..128 {
        let game = Game::random();
        let plain = game.clone().with_options(Options::default().compact(false));
        assert!(game.list_psne().unwrap() == plain.list_psne().unwrap());
        assert!(game.list_vwdse().unwrap() == plain.list_vwdse().unwrap());
    }
}

#[test]
fn parallelism_changes_nothing() {
    for _ in 0..128 {
        let game = Game::random();
        let serial = game.clone().with_options(sequential());
        assert!(game.list_psne().unwrap() == serial.list_psne().unwrap());
        assert!(game.list_vwdse().unwrap() == serial.list_vwdse().unwrap());
    }
}

#[test]
fn partitioned_maxima_match_single_pass() {
    use rand::Rng;
    let ref mut rng = rand::rng();
    let shape = Shape::new(vec![12, 10, 9, 17]).unwrap();
    let tensor = PayoffTensor::tabulate(shape, |_| {
        (0..4).map(|_| rng.random_range(-50..=50)).collect()
    })
    .unwrap();
    let parallel = Maxima::build(&tensor, true).unwrap();
    let serial = Maxima::build(&tensor, false).unwrap();
    assert!(parallel == serial);
    let parallel = Psne::from((&tensor, &parallel)).enumerate(true).unwrap();
    let serial = Psne::from((&tensor, &serial)).enumerate(false).unwrap();
    assert!(parallel == serial);
}

#[test]
fn empty_candidate_set_annihilates_vwdse() {
    for _ in 0..128 {
        let game = Game::random();
        let candidates = Vwdse::from(game.tensor()).candidates(true);
        if candidates.iter().any(Vec::is_empty) {
            assert!(game.list_vwdse().unwrap().is_empty());
        }
    }
}

#[test]
fn vwdse_profiles_are_equilibria() {
    for _ in 0..128 {
        let game = Game::random();
        let psne = game.list_psne().unwrap();
        for profile in game.list_vwdse().unwrap() {
            assert!(psne.contains(&profile));
        }
    }
}
