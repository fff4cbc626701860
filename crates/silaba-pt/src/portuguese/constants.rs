// Portuguese orthographic tables used by the syllable separator.
//
// All entries are lowercase; callers compare against `Letter::lower`.

/// Two-letter consonant digraphs that are never split: ch, lh, nh.
pub(crate) const DIGRAPHS: &[[char; 2]] = &[['c', 'h'], ['l', 'h'], ['n', 'h']];

/// The palatal nasal digraph. A glide directly before it is always
/// syllabic (ra-i-nha).
pub(crate) const PALATAL_NASAL: [char; 2] = ['n', 'h'];

/// `g`/`q` plus a silent `u` (or `ü`), kept together as one onset unit.
pub(crate) const LABIAL_ONSETS: &[[char; 2]] = &[
    ['g', 'u'],
    ['q', 'u'],
    ['g', '\u{00FC}'], // gü
    ['q', '\u{00FC}'], // qü
];

/// Consonants after which a `u` may be silent.
pub(crate) const SILENT_U_CARRIERS: &[char] = &['g', 'q'];

/// The letters a silent `u` may stand for: u, ü.
pub(crate) const SILENT_U: &[char] = &['u', '\u{00FC}'];

/// Vowels that make a preceding `gu`/`qu` silent: e, é, ê, i, í.
pub(crate) const SILENT_U_TRIGGERS: &[char] = &['e', '\u{00E9}', '\u{00EA}', 'i', '\u{00ED}'];

/// Identical consonant pairs that always split between two syllables.
pub(crate) const GEMINATES: &[[char; 2]] = &[['r', 'r'], ['s', 's']];

/// Greek and Latin clusters licensed as an onset only at the start of a word.
pub(crate) const WORD_INITIAL_CLUSTERS: &[[char; 2]] = &[
    ['p', 'n'],
    ['p', 's'],
    ['m', 'n'],
    ['g', 'n'],
    ['t', 'l'],
    ['p', 't'],
    ['c', 't'],
];

/// Nasal vowel + vowel pairs forming one nucleus: ãe, õe, ão.
pub(crate) const NASAL_DIPHTHONGS: &[[char; 2]] = &[
    ['\u{00E3}', 'e'], // ãe
    ['\u{00F5}', 'e'], // õe
    ['\u{00E3}', 'o'], // ão
];

/// A coda made of this letter alone does not close a glide (pais, aus-te-ro).
pub(crate) const GLIDE_TOLERATED_CODA: char = 's';

/// A lone onset that lets `ui` stay a diphthong (to-lui-co).
pub(crate) const UI_DIPHTHONG_ONSET: char = 'l';
