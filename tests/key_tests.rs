use cipherforge::consts::ALPHABET_SIZE;
use cipherforge::key::Key;
use cipherforge::optimizer::mutation;
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_key()(seed in any::<u64>()) -> Key {
        mutation::random_key(&mut fastrand::Rng::with_seed(seed))
    }
}

prop_compose! {
    fn arb_letters(max: usize)(text in proptest::collection::vec(b'A'..=b'Z', 1..max)) -> Vec<u8> {
        text
    }
}

proptest! {
    #[test]
    fn prop_random_key_is_bijection(key in arb_key()) {
        prop_assert!(key.is_bijection());
        let mut seen = [false; ALPHABET_SIZE];
        for &c in key.as_array() {
            prop_assert!(!seen[c as usize]);
            seen[c as usize] = true;
        }
    }

    #[test]
    fn prop_decrypt_inverts_encrypt(key in arb_key(), text in arb_letters(200)) {
        let cipher = key.encrypt(&text);
        prop_assert_eq!(cipher.len(), text.len());
        prop_assert_eq!(key.decrypt(&cipher), text);
    }

    #[test]
    fn prop_inverse_is_involution(key in arb_key()) {
        prop_assert_eq!(key.inverse().inverse(), key);
        let decrypt_key = key.inverse();
        for i in 0..ALPHABET_SIZE {
            prop_assert_eq!(decrypt_key.as_array()[key.as_array()[i] as usize] as usize, i);
        }
    }

    #[test]
    fn prop_swap_preserves_bijection(key in arb_key(), a in 0..ALPHABET_SIZE, b in 0..ALPHABET_SIZE) {
        let mut swapped = key;
        swapped.swap(a, b);
        prop_assert!(swapped.is_bijection());

        let diff = key
            .as_array()
            .iter()
            .zip(swapped.as_array())
            .filter(|(x, y)| x != y)
            .count();
        prop_assert!(diff == 0 || diff == 2);
    }

    #[test]
    fn prop_alphabet_form_round_trips(key in arb_key()) {
        let text = key.to_alphabet();
        prop_assert_eq!(text.parse::<Key>().unwrap(), key);
        prop_assert_eq!(Key::from_alphabet(&text.to_lowercase()).unwrap(), key);
    }
}

#[test]
fn test_identity_is_fixed_point() {
    let text = b"ATTACKATDAWN".to_vec();
    assert_eq!(Key::identity().encrypt(&text), text);
    assert_eq!(Key::identity().decrypt(&text), text);
    assert_eq!(Key::default(), Key::identity());
}

#[test]
fn test_caesar_three() {
    let key = Key::caesar(3);
    assert_eq!(key.to_alphabet(), "DEFGHIJKLMNOPQRSTUVWXYZABC");
    assert_eq!(key.encrypt(b"ATTACKATDAWN"), b"DWWDFNDWGDZQ");
}

#[test]
fn test_decrypt_into_reuses_buffer() {
    let key = Key::caesar(5);
    let cipher = key.encrypt(b"HELLOWORLD");
    let mut buf = vec![b'?'; cipher.len()];
    key.decrypt_into(&cipher, &mut buf);
    assert_eq!(buf, b"HELLOWORLD");
}
