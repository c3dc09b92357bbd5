// SPDX-License-Identifier: MPL-2.0
//! Default message pools, one per notification kind.
//!
//! When a request arrives without a message, one entry of its kind's pool is
//! shown instead. Every pool holds [`POOL_SIZE`] non-empty strings.

use super::notification::Kind;

/// Number of curated messages per kind.
pub const POOL_SIZE: usize = 15;

const WAITING: [&str; POOL_SIZE] = [
    "Waiting on your decision",
    "Hey, I need your input ✋",
    "Paused and waiting for you",
    "Your move 🎲",
    "Hanging on your answer",
    "Ball's in your court",
    "Thinking… but the call is yours",
    "*drums fingers on the desk* …waiting",
    "Made some tea, still waiting ☕",
    "Deliberating, but you decide",
    "Still here. Patiently. Quietly. Waiting.",
    "Ping! A moment of your attention, please",
    "Holding off until you weigh in 🤔",
    "Staring out the window, waiting for a sign",
    "Need data from the human in the loop",
];

const SUCCESS: [&str; POOL_SIZE] = [
    "Done! Everything went smoothly ✓",
    "Task complete. High five! 🖐️",
    "Success, time for a coffee ☕",
    "Finished! Delivered as promised 💪",
    "Operation completed successfully ✨",
    "Bam! Done. What's next?",
    "Mission accomplished. Over and out 🎯",
    "Another one shipped",
    "Everything works. Like clockwork ⌚",
    "Compiled, tested, delivered 📦",
    "Success! Even the electrons are happy",
    "Task ✓, cue the pixel-art celebration",
    "100% complete. Zero errors.",
    "Made something nice 🎨",
    "git commit -m 'it works' 🎉",
];

const ERROR: [&str; POOL_SIZE] = [
    "Oops. Something went wrong 😬",
    "Houston, we have a problem",
    "Error! But no panicking… yet",
    "Something fell over, check the logs",
    "Exception caught. Literally.",
    "Tripped over a cable 🔌",
    "Error 🫠 but it's fixable",
    "The compiler says: not today",
    "Not a bug, it's… no, it's a bug 🐛",
    "Oops. Even machines get it wrong",
    "Emotional segfault. Time to debug.",
    "Something blew up, quietly. Take a look.",
    "Tried. Failed. Sorry.",
    "Red alert! Don't worry, it's manageable",
    "Runtime error: not enough coffee ☕❌",
];

const INFO: [&str; POOL_SIZE] = [
    "A quick note for you",
    "FYI, something happened 📋",
    "Status update",
    "Heads up! There's news",
    "Reporting from the front",
    "Info: things are happening 🔄",
    "Short update, nothing urgent",
    "Something you might want to know",
    "A note from your assistant 📝",
    "Status: all systems go",
    "Got some news for you",
    "Fresh from the engine room ⚙️",
    "Ping, small update",
    "Sending smoke signals 🏔️",
    "A message in a bottle 🍾",
];

/// Returns the message pool for `kind`.
#[must_use]
pub fn pool(kind: Kind) -> &'static [&'static str] {
    match kind {
        Kind::Waiting => &WAITING,
        Kind::Success => &SUCCESS,
        Kind::Error => &ERROR,
        Kind::Info => &INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pool_is_full_and_non_empty() {
        for kind in Kind::ALL {
            let entries = pool(kind);
            assert_eq!(entries.len(), POOL_SIZE);
            assert!(entries.iter().all(|m| !m.trim().is_empty()), "{kind} pool has blanks");
        }
    }

    #[test]
    fn pools_do_not_share_entries() {
        for a in Kind::ALL {
            for b in Kind::ALL.into_iter().filter(|b| *b != a) {
                assert!(pool(a).iter().all(|m| !pool(b).contains(m)));
            }
        }
    }
}
