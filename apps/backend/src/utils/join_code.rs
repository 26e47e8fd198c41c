//! Lobby and ticket code generation.
//!
//! Codes use Crockford's Base32 alphabet (no I, L, O, U) so they survive
//! being read aloud or copied by hand. Lobby codes are 6 characters;
//! ticket codes are 8.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

pub const LOBBY_CODE_LEN: usize = 6;
pub const TICKET_CODE_LEN: usize = 8;

fn random_code(len: usize) -> String {
    let mut rng = rand::rng();

    let mut s = String::with_capacity(len);
    for _ in 0..len {
        let i = rng.random_range(0..CROCKFORD.len());
        s.push(CROCKFORD[i] as char);
    }
    s
}

/// Generate a candidate lobby code. Uniqueness against live lobbies is the
/// store's job; the code space (32^6) dwarfs any realistic lobby count.
pub fn generate_lobby_code() -> String {
    random_code(LOBBY_CODE_LEN)
}

/// Generate a single-use join ticket code.
pub fn generate_ticket_code() -> String {
    random_code(TICKET_CODE_LEN)
}
