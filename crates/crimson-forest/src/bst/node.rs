use crate::types::{KeyNode, Node};

/// Plain binary-tree cell: a key and three arena links.
///
/// The parent link is maintained on every relink like any other link,
/// but the plain-tree algorithms never depend on it; it exists so the
/// shared upward-walk utilities work on either node layout.
#[derive(Clone, Debug)]
pub struct BstNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
}

impl<K> BstNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
        }
    }
}

impl<K> Node for BstNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for BstNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn set_key(&mut self, key: K) {
        self.k = key;
    }
}
