#![allow(dead_code)]

use cipherforge::config::FitnessParams;
use cipherforge::corpus::{count_ngrams, write_corpus};
use cipherforge::scorer::loader::RawCorpus;
use cipherforge::scorer::FitnessModel;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Plain English prose used to train test models.
pub const TRAINING_TEXT: &str = r#"The old harbour town woke slowly in the grey light of the morning. Fishing boats rocked against the stone wall and the gulls called to each other above the water. Along the narrow streets the bakers opened their doors and the smell of fresh bread drifted out into the cold air. It was the kind of day when nothing seemed to happen and yet everything changed.

Martha had lived in the town for most of her life. She knew every house and every family, and she knew which of the neighbours would stop to talk and which would hurry past with their eyes on the ground. Her father had been a sailor and her mother had kept the small shop at the end of the quay, selling rope and nails and tea and anything else that the sailors needed before they went back out to sea. When her parents died she took over the shop, and for twenty years she had stood behind the same wooden counter and watched the world come and go through the same glass door.

On that morning a stranger came into the shop. He was tall and thin, with a long coat that was wet at the hem, and he carried a leather case under one arm. He asked for a map of the coast and a box of matches, and while she searched the shelves he stood by the window and looked out at the harbour as if he were waiting for someone. When she gave him the map he thanked her and paid with a silver coin that was older than anything she had seen. Then he asked whether she remembered the ship that had been lost in the storm thirty years before.

She did remember it. Everyone in the town remembered it, though nobody spoke of it any more. The ship had left the harbour on a clear evening with a crew of eleven men, and by midnight the wind had turned and the sea had risen higher than anyone could recall. In the morning there was nothing left but a few broken planks on the beach and a single lantern that was still burning when the children found it. The families waited for weeks, and then for months, and then at last they stopped waiting and began to live again as well as they could.

The stranger listened to her story without saying a word. When she had finished he opened the leather case and took out a small book with a red cover. He told her that it was the captain's journal, and that it had been found far to the south on an island where no ship from the town had ever been. He did not know how it had travelled so far, and he did not know whether any of the men had survived, but he thought that the people of the town had a right to read it. He put the book on the counter, lifted his hat, and walked out into the street before she could ask him his name.

For a long time she did not open the book. She turned it over in her hands and looked at the faded letters on the cover, and she thought about the families who had waited and the children who were now grown and had children of their own. Then, because the shop was quiet and the rain had started again, she sat down by the stove and began to read. The first pages were only notes about the weather and the cargo and the names of the crew. But as the days went on the writing changed, and the captain began to describe a journey that none of them had planned and that none of them could have imagined.

It is a strange thing to read the words of a man who has been gone for so many years. His voice was calm and careful, and he wrote about the storm as if it were a difficult but ordinary problem to be solved. He wrote about the men who worked through the night to keep the ship afloat, and about the boy who climbed the mast to cut away the torn sail, and about the moment when the wind finally dropped and they saw that they had been carried far from any coast they knew. They had food for a week and water for less, and they did not know where they were.

What happened after that was the reason the stranger had come. The journal told how the ship drifted for nine days, how the men caught rain in the sails and fish with hooks made from nails, and how on the tenth day they saw a line of green on the horizon. It was an island with tall trees and a river of clear water, and there were people living there who had never seen a ship. The people were kind to them. They gave them food and shelter and helped them mend the broken hull, and for a whole season the sailors lived among them and learned their language and their songs."#;

/// Held-out plaintext: none of these sentences appear in `TRAINING_TEXT`.
pub const HELD_OUT: &str = "WHEN THE SUN ROSE OVER THE HILLS THE FARMERS WENT OUT TO THE FIELDS \
AND THE CHILDREN RAN DOWN TO THE RIVER AND THE OLD MEN SAT BY THE DOOR AND WATCHED THE BOATS \
COME BACK INTO THE HARBOUR";

/// Quadgram counts of `TRAINING_TEXT`, most frequent first.
pub fn english_corpus() -> RawCorpus {
    RawCorpus {
        n: 4,
        entries: count_ngrams(TRAINING_TEXT, 4).unwrap(),
    }
}

/// Model whose baseline is the single most frequent quadgram. Every other
/// table entry sits at or below it, so a lower score means a likelier text.
pub fn english_model() -> FitnessModel {
    let params = FitnessParams {
        reference_top_k: 1,
        ..Default::default()
    };
    FitnessModel::from_corpus(&english_corpus(), &params).unwrap()
}

/// Writes the training corpus to `<dir>/english_quadgrams.txt`.
pub fn write_english_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("english_quadgrams.txt");
    let file = File::create(&path).unwrap();
    write_corpus(file, &english_corpus().entries, 0).unwrap();
    path
}
