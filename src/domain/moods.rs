//! LiveJournal mood id table
//!
//! Entries carry mood names directly, so nothing consults this table
//! today; it exists for exports that only recorded the numeric mood id.

/// Known mood ids and their names, ordered by name.
pub const MOODS: &[(u32, &str)] = &[
    (90, "accomplished"),
    (1, "aggravated"),
    (44, "amused"),
    (2, "angry"),
    (3, "annoyed"),
    (4, "anxious"),
    (114, "apathetic"),
    (108, "artistic"),
    (87, "awake"),
    (110, "bitchy"),
    (92, "blah"),
    (113, "blank"),
    (5, "bored"),
    (59, "bouncy"),
    (91, "busy"),
    (68, "calm"),
    (125, "cheerful"),
    (99, "chipper"),
    (84, "cold"),
    (63, "complacent"),
    (6, "confused"),
    (101, "contemplative"),
    (64, "content"),
    (8, "cranky"),
    (7, "crappy"),
    (106, "crazy"),
    (107, "creative"),
    (129, "crushed"),
    (56, "curious"),
    (104, "cynical"),
    (9, "depressed"),
    (45, "determined"),
    (130, "devious"),
    (119, "dirty"),
    (55, "disappointed"),
    (10, "discontent"),
    (127, "distressed"),
    (35, "ditzy"),
    (115, "dorky"),
    (40, "drained"),
    (34, "drunk"),
    (98, "ecstatic"),
    (79, "embarrassed"),
    (11, "energetic"),
    (12, "enraged"),
    (13, "enthralled"),
    (80, "envious"),
    (78, "exanimate"),
    (41, "excited"),
    (14, "exhausted"),
    (67, "flirty"),
    (47, "frustrated"),
    (93, "full"),
    (103, "geeky"),
    (120, "giddy"),
    (72, "giggly"),
    (38, "gloomy"),
    (126, "good"),
    (132, "grateful"),
    (51, "groggy"),
    (95, "grumpy"),
    (111, "guilty"),
    (15, "happy"),
    (16, "high"),
    (43, "hopeful"),
    (17, "horny"),
    (83, "hot"),
    (18, "hungry"),
    (52, "hyper"),
    (116, "impressed"),
    (48, "indescribable"),
    (65, "indifferent"),
    (19, "infuriated"),
    (128, "intimidated"),
    (20, "irate"),
    (112, "irritated"),
    (133, "jealous"),
    (21, "jubilant"),
    (33, "lazy"),
    (75, "lethargic"),
    (76, "listless"),
    (22, "lonely"),
    (86, "loved"),
    (39, "melancholy"),
    (57, "mellow"),
    (36, "mischievous"),
    (23, "moody"),
    (37, "morose"),
    (117, "naughty"),
    (97, "nauseated"),
    (102, "nerdy"),
    (134, "nervous"),
    (60, "nostalgic"),
    (124, "numb"),
    (61, "okay"),
    (70, "optimistic"),
    (58, "peaceful"),
    (73, "pensive"),
    (71, "pessimistic"),
    (24, "pissedoff"),
    (109, "pleased"),
    (118, "predatory"),
    (89, "productive"),
    (105, "quixotic"),
    (77, "recumbent"),
    (69, "refreshed"),
    (123, "rejected"),
    (62, "rejuvenated"),
    (53, "relaxed"),
    (42, "relieved"),
    (54, "restless"),
    (100, "rushed"),
    (25, "sad"),
    (26, "satisfied"),
    (46, "scared"),
    (122, "shocked"),
    (82, "sick"),
    (66, "silly"),
    (49, "sleepy"),
    (27, "sore"),
    (28, "stressed"),
    (121, "surprised"),
    (81, "sympathetic"),
    (131, "thankful"),
    (29, "thirsty"),
    (30, "thoughtful"),
    (31, "tired"),
    (32, "touched"),
    (74, "uncomfortable"),
    (96, "weird"),
    (88, "working"),
    (85, "worried"),
];

/// Look up a mood name by its numeric id.
pub fn mood_name(id: u32) -> Option<&'static str> {
    MOODS.iter().find(|(i, _)| *i == id).map(|(_, name)| *name)
}
