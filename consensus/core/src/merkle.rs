use crate::hashing::double_sha256;
use crate::Hash;

/// Represents a Merkle tree for transaction hashes
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// Nodes at each level of the tree (leaves at level 0)
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Creates a new Merkle tree from a list of transaction hashes.
    ///
    /// A level with an odd number of nodes pairs its last node with itself.
    pub fn from_hashes(hashes: Vec<Hash>) -> Self {
        if hashes.is_empty() {
            return Self { levels: vec![] };
        }

        let mut levels = vec![hashes];
        while let Some(current_level) = levels.last().filter(|level| level.len() > 1) {
            let next_level = current_level
                .chunks(2)
                .map(|chunk| {
                    let left = chunk[0];
                    let right = chunk.get(1).copied().unwrap_or(left);
                    Self::hash_pair(&left, &right)
                })
                .collect();
            levels.push(next_level);
        }

        Self { levels }
    }

    /// Returns the Merkle root hash; the zero hash for an empty tree
    pub fn root(&self) -> Hash {
        self.levels.last().and_then(|level| level.first()).copied().unwrap_or_default()
    }

    /// Hashes two nodes together to create their parent
    fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut combined = Vec::with_capacity(64);
        combined.extend_from_slice(left.as_bytes());
        combined.extend_from_slice(right.as_bytes());
        double_sha256(&combined)
    }
}

/// Merkle root over transaction ids in block order
pub fn calc_merkle_root(hashes: impl IntoIterator<Item = Hash>) -> Hash {
    MerkleTree::from_hashes(hashes.into_iter().collect()).root()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = MerkleTree::from_hashes(vec![]);
        assert_eq!(tree.root(), Hash::default());
    }

    #[test]
    fn test_single_tx() {
        let hash = Hash::from([1u8; 32]);
        assert_eq!(calc_merkle_root([hash]), hash);
    }

    #[test]
    fn test_pair() {
        let a = Hash::from([1u8; 32]);
        let b = Hash::from([2u8; 32]);
        let mut concat = [1u8; 64];
        concat[32..].copy_from_slice(&[2u8; 32]);
        assert_eq!(calc_merkle_root([a, b]), double_sha256(&concat));
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let a = Hash::from([1u8; 32]);
        let b = Hash::from([2u8; 32]);
        let c = Hash::from([3u8; 32]);
        assert_eq!(calc_merkle_root([a, b, c]), calc_merkle_root([a, b, c, c]));
    }
}
