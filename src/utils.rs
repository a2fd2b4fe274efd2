use std::ops::Neg;

use crate::huffman::frequencies::FrequencyList;

/// Calculates the Shannon entropy, in bits per symbol, of the distribution described by `freqs`:
/// ```text
/// entropy(P) = - ∑ p(x) * log(p(x))
/// ```
/// This is the lower bound for the average code length of any prefix code built for it.
pub fn entropy(freqs: &FrequencyList) -> f64 {
    let total_freq = freqs.total_freq() as f64;
    let mut entropy = 0.0;

    for entry in freqs.entries() {
        let pr = entry.freq as f64 / total_freq;
        entropy += pr * f64::log2(pr);
    }
    entropy.neg()
}

/// The size, in bytes, of `bits` bits once padded to whole bytes.
pub fn bytes_for(bits: usize) -> usize {
    bits.div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy() {
        let freqs = FrequencyList::from_bytes(b"aaabbbcccc");
        assert_eq!("1.57", format!("{:.2}", entropy(&freqs)));
    }

    #[test]
    fn test_entropy_of_degenerate_inputs() {
        assert_eq!(0.0, entropy(&FrequencyList::from_bytes(&[7; 32])));
        assert_eq!(0.0, entropy(&FrequencyList::default()));
    }

    #[test]
    fn test_bytes_for() {
        assert_eq!(bytes_for(0), 0);
        assert_eq!(bytes_for(1), 1);
        assert_eq!(bytes_for(16), 2);
        assert_eq!(bytes_for(17), 3);
    }
}
