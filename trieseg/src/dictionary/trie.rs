//! バイト単位で分岐するトライ
//!
//! 各辺は1バイトでラベル付けされ、根から終端印の付いたノードまでの経路が
//! 1つの辞書語のバイト列に対応します。子は親が排他的に所有するため、
//! 共有や循環は発生しません。

use std::fmt;

use hashbrown::HashMap;

/// トライのノード
///
/// 子ノードはバイト値をキーとする疎なマップで保持します。256要素の配列と
/// 観測可能な挙動は同じで、メモリ使用量のみが異なります。
///
/// 部分木の走査と解放はいずれも明示的なスタックで行うため、単語のバイト長に
/// かかわらずコールスタックの深さは一定です。
#[derive(Default)]
pub struct TrieNode {
    is_end: bool,
    children: HashMap<u8, TrieNode>,
}

impl TrieNode {
    /// 空のノードを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定したバイトの子ノードが存在するかを返します。
    #[inline(always)]
    pub fn child_exists(&self, byte: u8) -> bool {
        self.children.contains_key(&byte)
    }

    /// 指定したバイトの子ノードを返します。
    #[inline(always)]
    pub fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children.get(&byte)
    }

    /// 指定したバイトの子ノードを返します。存在しない場合は空のノードを作成して連結します。
    ///
    /// # 引数
    ///
    /// * `byte` - 辺のラベル
    ///
    /// # 戻り値
    ///
    /// 既存または新規の子ノードへの可変参照
    #[inline(always)]
    pub fn get_or_create_child(&mut self, byte: u8) -> &mut TrieNode {
        self.children.entry(byte).or_default()
    }

    /// このノードで終わる辞書語が存在するかを返します。
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    #[inline(always)]
    pub(crate) fn mark_end(&mut self) {
        self.is_end = true;
    }

    /// 根から `bytes` の経路を辿り、到達したノードを返します。
    ///
    /// # 戻り値
    ///
    /// 経路が途中で途切れた場合は `None`
    pub fn walk(&self, bytes: &[u8]) -> Option<&TrieNode> {
        bytes.iter().try_fold(self, |node, &b| node.child(b))
    }

    /// このノードを根とする部分木のノード数（自身を含む）を返します。
    pub fn num_nodes(&self) -> usize {
        self.fold_subtree(0, |acc, _| acc + 1)
    }

    /// このノードを根とする部分木に含まれる終端ノードの数を返します。
    pub fn num_ends(&self) -> usize {
        self.fold_subtree(0, |acc, node| acc + usize::from(node.is_end))
    }

    /// 部分木の全ノードを深さ優先で訪問し、値を畳み込みます。
    fn fold_subtree<T, F>(&self, init: T, mut f: F) -> T
    where
        F: FnMut(T, &TrieNode) -> T,
    {
        let mut acc = init;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            acc = f(acc, node);
            stack.extend(node.children.values());
        }
        acc
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_end", &self.is_end)
            .field("num_children", &self.children.len())
            .finish()
    }
}
