//! Example: Confirm a sequence of writes against a growing log
//!
//! Plays the role of the transport layer: builds the proofs a server would
//! return for three successive writes and confirms each one, watching the
//! trust anchor advance. A real client would decode this material from the
//! server's wire format instead.
//!
//! Usage:
//!   cargo run --example verified_session

use veridb::merkle::{entry_digest, node_digest};
use veridb::{Entry, LogVerifier, Proof};

#[tokio::main]
async fn main() {
    let verifier = LogVerifier::new();
    let namespace = "defaultdb";

    // First write into an empty log: the tree is the leaf itself.
    let e0 = Entry::new(0, "greeting", "hello");
    let l0 = entry_digest(&e0);
    let first = Proof {
        leaf: l0,
        root: l0,
        at: 0,
        index: 0,
        inclusion_path: vec![],
        consistency_path: vec![],
    };

    let anchor = verifier
        .confirm(namespace, &e0, &first)
        .await
        .expect("first write should verify");
    println!("write 0 confirmed, anchor at position {}", anchor.tree_size);

    // Second write: the proof shows inclusion next to the first leaf.
    let e1 = Entry::new(1, "greeting", "hello again");
    let l1 = entry_digest(&e1);
    let root1 = node_digest(&l0, &l1);
    let second = Proof {
        leaf: l1,
        root: root1,
        at: 1,
        index: 1,
        inclusion_path: vec![l0],
        consistency_path: vec![],
    };

    let anchor = verifier
        .confirm(namespace, &e1, &second)
        .await
        .expect("second write should verify");
    println!("write 1 confirmed, anchor at position {}", anchor.tree_size);

    // Third write: from here on every proof must also show the tree only grew.
    let e2 = Entry::new(2, "greeting", "hello once more");
    let l2 = entry_digest(&e2);
    let root2 = node_digest(&root1, &l2);
    let third = Proof {
        leaf: l2,
        root: root2,
        at: 2,
        index: 2,
        inclusion_path: vec![root1],
        consistency_path: vec![l2],
    };

    let anchor = verifier
        .confirm(namespace, &e2, &third)
        .await
        .expect("third write should verify");
    println!(
        "write 2 confirmed, anchor at position {} ({})",
        anchor.tree_size, anchor.root
    );

    // A server trying to rewrite history is caught by the consistency leg.
    let rewritten = entry_digest(&Entry::new(0, "greeting", "goodbye"));
    let forged_root1 = node_digest(&rewritten, &l1);
    let forged_root2 = node_digest(&forged_root1, &l2);
    let forged = Proof {
        leaf: l2,
        root: forged_root2,
        at: 2,
        index: 2,
        inclusion_path: vec![forged_root1],
        consistency_path: vec![l2],
    };

    match verifier.confirm(namespace, &e2, &forged).await {
        Ok(_) => println!("forged proof unexpectedly accepted!"),
        Err(e) => println!("forged proof rejected: {}", e),
    }
}
