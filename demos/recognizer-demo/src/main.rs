use recognizer::recognize_with_sink;
use recognizer_core::TracingSink;
use token_stream::tokenize;
use treewalk::{BinarySearchTree, BinaryTree, MaxHeap, MinHeap, Trie};
use tracing_subscriber::EnvFilter;

fn main() {
    // Trial/backtrack tracing is off by default; enable it with e.g.
    // RUST_LOG=trace.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Grammar: E -> i + E | i");
    for input in ["i+i+i", "i+i", "i", "i+", "", "+i", "i*i"] {
        let stream = tokenize(input);
        let mut sink = TracingSink;
        let verdict = recognize_with_sink(&stream, &mut sink);
        println!("  {input:<8} => {verdict}");
    }

    println!();
    println!("Binary tree built by level-order insertion of 1..=7:");
    let tree = BinaryTree::from_values(1..=7);
    println!("  pre-order (recursive):  {:?}", tree.pre_order());
    println!("  pre-order (stack):      {:?}", tree.pre_order_iterative());
    println!("  in-order:               {:?}", tree.in_order());
    println!("  post-order:             {:?}", tree.post_order());
    println!("  level-order (queue):    {:?}", tree.level_order());
    println!("  height: {}, nodes: {}", tree.height(), tree.len());

    println!();
    println!("Binary search tree over [50, 30, 70, 20, 40, 60, 80]:");
    let mut bst = BinarySearchTree::from_values([50, 30, 70, 20, 40, 60, 80]);
    println!("  in-order (sorted):      {:?}", bst.in_order());
    println!("  contains 40: {}, contains 100: {}", bst.contains(&40), bst.contains(&100));
    println!("  min: {:?}, max: {:?}", bst.min(), bst.max());
    bst.remove(&30);
    println!("  after removing 30:      {:?}", bst.in_order());

    println!();
    println!("Heaps over [5, 3, 7, 1, 9, 4, 6]:");
    let mut min_heap = MinHeap::from_values([5, 3, 7, 1, 9, 4, 6]);
    let mut max_heap = MaxHeap::from_values([5, 3, 7, 1, 9, 4, 6]);
    let mut ascending = Vec::new();
    while let Some(value) = min_heap.pop() {
        ascending.push(value);
    }
    let mut descending = Vec::new();
    while let Some(value) = max_heap.pop() {
        descending.push(value);
    }
    println!("  min-heap drains:        {ascending:?}");
    println!("  max-heap drains:        {descending:?}");

    println!();
    println!("Trie over apple/app/application/apply:");
    let mut trie = Trie::from_words(["apple", "app", "application", "apply"]);
    println!("  words:                  {:?}", trie.words());
    println!("  completions of 'appl':  {:?}", trie.words_with_prefix("appl"));
    trie.remove("app");
    println!("  after removing 'app':   {:?}", trie.words());
}
