use crate::model::{Participant, Tickets};
use crate::stream::UniformStream;

/// Draws up to `count` distinct winners from `pool`, removing each of them
/// as it is drawn. The stream is advanced exactly once per winner.
///
/// A winner owns the half-open ticket range `[cumulative - tickets, cumulative)`
/// of the current pool, so members with zero tickets can never be picked.
/// Removal keeps the relative order of the remaining members, which the
/// cumulative scan depends on. Pools come from a validated `Population`, so
/// their total fits in `MAX_TOTAL_TICKETS`.
pub(crate) fn draw<S>(
    pool: &mut Vec<Participant>,
    count: usize,
    stream: &mut S,
) -> Vec<Participant>
where
    S: UniformStream + ?Sized,
{
    let mut winners = Vec::with_capacity(count.min(pool.len()));
    for _ in 0..count {
        let total_tickets: Tickets = pool.iter().map(|p| p.tickets).sum();
        if total_tickets == 0 {
            break;
        }

        let ticket = winning_ticket(stream.next_unit(), total_tickets);
        match owner_of(pool, ticket) {
            Some(index) => winners.push(pool.remove(index)),
            None => break,
        }
    }
    winners
}

fn winning_ticket(unit: f64, total_tickets: Tickets) -> Tickets {
    let ticket = (unit * total_tickets as f64).floor() as Tickets;
    ticket.min(total_tickets - 1)
}

fn owner_of(pool: &[Participant], ticket: Tickets) -> Option<usize> {
    let mut cumulative: Tickets = 0;
    pool.iter().position(|p| {
        cumulative += p.tickets;
        ticket < cumulative
    })
}
