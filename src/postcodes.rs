use serde::Serialize;

/// Postal delivery region, in both grammatical cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    Hofudborgarsvaedid,
    SudurlandOgReykjanes,
    VesturlandOgVestfirdir,
    Nordurland,
    Austurland,
}

impl Region {
    pub fn nominative(self) -> &'static str {
        match self {
            Region::Hofudborgarsvaedid => "Höfuðborgarsvæðið",
            Region::SudurlandOgReykjanes => "Suðurland og Reykjanes",
            Region::VesturlandOgVestfirdir => "Vesturland og Vestfirðir",
            Region::Nordurland => "Norðurland",
            Region::Austurland => "Austurland",
        }
    }

    pub fn dative(self) -> &'static str {
        match self {
            Region::Hofudborgarsvaedid => "Höfuðborgarsvæðinu",
            Region::SudurlandOgReykjanes => "Suðurlandi og Reykjanesi",
            Region::VesturlandOgVestfirdir => "Vesturlandi og Vestfjörðum",
            Region::Nordurland => "Norðurlandi",
            Region::Austurland => "Austurlandi",
        }
    }
}

/// Postcode settlement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostcodeKind {
    /// Urban area.
    Thettbyli,
    /// Rural area.
    Dreifbyli,
    /// Post office boxes.
    Postholf,
}

impl PostcodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PostcodeKind::Thettbyli => "Þéttbýli",
            PostcodeKind::Dreifbyli => "Dreifbýli",
            PostcodeKind::Postholf => "Pósthólf",
        }
    }
}

/// One entry of the postcode registry: region and placename in both
/// grammatical cases, plus the settlement kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Postcode {
    pub code: u32,
    pub region: Region,
    pub stadur_nf: &'static str,
    pub stadur_tgf: &'static str,
    pub kind: PostcodeKind,
}

// Compiled from the Icelandic postal service registry
// (https://www.postur.is/gogn/Gotuskra/postnumer.txt), placenames
// lemmatized to the nominative case. Sorted by code.
const POSTCODES: &[(u32, Region, &str, &str, PostcodeKind)] = &[
    (101, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (102, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (103, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (104, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (105, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (107, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (108, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (109, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (110, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (111, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (112, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (113, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (116, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Thettbyli),
    (121, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (123, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (124, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (125, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (127, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (128, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (129, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (130, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (132, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík", PostcodeKind::Postholf),
    (162, Region::Hofudborgarsvaedid, "Reykjavík", "Reykjavík - Dreifbýli", PostcodeKind::Dreifbyli),
    (170, Region::Hofudborgarsvaedid, "Seltjarnarnes", "Seltjarnarnesi", PostcodeKind::Thettbyli),
    (172, Region::Hofudborgarsvaedid, "Seltjarnarnes", "Seltjarnarnesi", PostcodeKind::Postholf),
    (190, Region::SudurlandOgReykjanes, "Vogar", "Vogum", PostcodeKind::Thettbyli),
    (191, Region::SudurlandOgReykjanes, "Vogar", "Vogum", PostcodeKind::Dreifbyli),
    (200, Region::Hofudborgarsvaedid, "Kópavogur", "Kópavogi", PostcodeKind::Thettbyli),
    (201, Region::Hofudborgarsvaedid, "Kópavogur", "Kópavogi", PostcodeKind::Thettbyli),
    (202, Region::Hofudborgarsvaedid, "Kópavogur", "Kópavogi", PostcodeKind::Postholf),
    (203, Region::Hofudborgarsvaedid, "Kópavogur", "Kópavogi", PostcodeKind::Thettbyli),
    (210, Region::Hofudborgarsvaedid, "Garðabær", "Garðabæ", PostcodeKind::Thettbyli),
    (212, Region::Hofudborgarsvaedid, "Garðabær", "Garðabæ", PostcodeKind::Postholf),
    (220, Region::Hofudborgarsvaedid, "Hafnarfjörður", "Hafnarfirði", PostcodeKind::Thettbyli),
    (221, Region::Hofudborgarsvaedid, "Hafnarfjörður", "Hafnarfirði", PostcodeKind::Thettbyli),
    (222, Region::Hofudborgarsvaedid, "Hafnarfjörður", "Hafnarfirði", PostcodeKind::Postholf),
    (225, Region::Hofudborgarsvaedid, "Garðabær", "Garðabær", PostcodeKind::Thettbyli),
    (230, Region::SudurlandOgReykjanes, "Reykjanesbær", "Reykjanesbæ", PostcodeKind::Thettbyli),
    (232, Region::SudurlandOgReykjanes, "Reykjanesbær", "Reykjanesbæ", PostcodeKind::Postholf),
    (233, Region::SudurlandOgReykjanes, "Reykjanesbær", "Reykjanesbæ", PostcodeKind::Dreifbyli),
    (235, Region::SudurlandOgReykjanes, "Keflavíkurflugvöllur", "Keflavíkurflugvöllur", PostcodeKind::Thettbyli),
    (240, Region::SudurlandOgReykjanes, "Grindavík", "Grindavík", PostcodeKind::Thettbyli),
    (241, Region::SudurlandOgReykjanes, "Grindavík", "Grindavík", PostcodeKind::Dreifbyli),
    (245, Region::SudurlandOgReykjanes, "Sandgerði", "Sandgerði", PostcodeKind::Thettbyli),
    (246, Region::SudurlandOgReykjanes, "Sandgerði", "Sandgerði", PostcodeKind::Dreifbyli),
    (250, Region::SudurlandOgReykjanes, "Garður", "Garði", PostcodeKind::Thettbyli),
    (251, Region::SudurlandOgReykjanes, "Garður", "Garði", PostcodeKind::Dreifbyli),
    (260, Region::SudurlandOgReykjanes, "Reykjanesbær", "Reykjanesbæ", PostcodeKind::Thettbyli),
    (262, Region::SudurlandOgReykjanes, "Reykjanesbær", "Reykjanesbæ", PostcodeKind::Thettbyli),
    (270, Region::Hofudborgarsvaedid, "Mosfellsbær", "Mosfellsbæ", PostcodeKind::Thettbyli),
    (271, Region::Hofudborgarsvaedid, "Mosfellsbær", "Mosfellsbæ", PostcodeKind::Dreifbyli),
    (276, Region::Hofudborgarsvaedid, "Mosfellsbær", "Mosfellsbæ", PostcodeKind::Dreifbyli),
    (300, Region::VesturlandOgVestfirdir, "Akranes", "Akranesi", PostcodeKind::Thettbyli),
    (301, Region::VesturlandOgVestfirdir, "Akranes", "Akranesi", PostcodeKind::Dreifbyli),
    (302, Region::VesturlandOgVestfirdir, "Akranes", "Akranesi", PostcodeKind::Postholf),
    (310, Region::VesturlandOgVestfirdir, "Borgarnes", "Borgarnesi", PostcodeKind::Thettbyli),
    (311, Region::VesturlandOgVestfirdir, "Borgarnes", "Borgarnesi", PostcodeKind::Dreifbyli),
    (320, Region::VesturlandOgVestfirdir, "Reykholt í Borgarfirði", "Reykholt í Borgarfirði", PostcodeKind::Dreifbyli),
    (340, Region::VesturlandOgVestfirdir, "Stykkishólmur", "Stykkishólmi", PostcodeKind::Thettbyli),
    (341, Region::VesturlandOgVestfirdir, "Stykkishólmur", "Stykkishólmi", PostcodeKind::Dreifbyli),
    (345, Region::VesturlandOgVestfirdir, "Flatey á Breiðafirði", "Flatey á Breiðafirði", PostcodeKind::Dreifbyli),
    (350, Region::VesturlandOgVestfirdir, "Grundarfjörður", "Grundarfirði", PostcodeKind::Thettbyli),
    (351, Region::VesturlandOgVestfirdir, "Grundarfjörður", "Grundarfirði", PostcodeKind::Dreifbyli),
    (355, Region::VesturlandOgVestfirdir, "Ólafsvík", "Ólafsvík", PostcodeKind::Thettbyli),
    (356, Region::VesturlandOgVestfirdir, "Snæfellsbær", "Snæfellsbæ", PostcodeKind::Dreifbyli),
    (360, Region::VesturlandOgVestfirdir, "Hellissandur", "Hellissandi", PostcodeKind::Thettbyli),
    (370, Region::VesturlandOgVestfirdir, "Búðardalur", "Búðardal", PostcodeKind::Thettbyli),
    (371, Region::VesturlandOgVestfirdir, "Búðardalur", "Búðardal", PostcodeKind::Dreifbyli),
    (380, Region::VesturlandOgVestfirdir, "Reykhólahreppur", "Reykhólahreppi", PostcodeKind::Thettbyli),
    (381, Region::VesturlandOgVestfirdir, "Reykhólahreppur", "Reykhólahreppi", PostcodeKind::Dreifbyli),
    (400, Region::VesturlandOgVestfirdir, "Ísafjörður", "Ísafirði", PostcodeKind::Thettbyli),
    (401, Region::VesturlandOgVestfirdir, "Ísafjörður", "Ísafirði", PostcodeKind::Dreifbyli),
    (410, Region::VesturlandOgVestfirdir, "Hnífsdalur", "Hnífsdal", PostcodeKind::Thettbyli),
    (415, Region::VesturlandOgVestfirdir, "Bolungarvík", "Bolungarvík", PostcodeKind::Thettbyli),
    (416, Region::VesturlandOgVestfirdir, "Bolungarvík", "Bolungarvík", PostcodeKind::Dreifbyli),
    (420, Region::VesturlandOgVestfirdir, "Súðavík", "Súðavík", PostcodeKind::Thettbyli),
    (421, Region::VesturlandOgVestfirdir, "Súðavík", "Súðavík", PostcodeKind::Dreifbyli),
    (425, Region::VesturlandOgVestfirdir, "Flateyri", "Flateyri", PostcodeKind::Thettbyli),
    (426, Region::VesturlandOgVestfirdir, "Flateyri", "Flateyri", PostcodeKind::Dreifbyli),
    (430, Region::VesturlandOgVestfirdir, "Suðureyri", "Suðureyri", PostcodeKind::Thettbyli),
    (431, Region::VesturlandOgVestfirdir, "Suðureyri", "Suðureyri", PostcodeKind::Dreifbyli),
    (450, Region::VesturlandOgVestfirdir, "Patreksfjörður", "Patreksfirði", PostcodeKind::Thettbyli),
    (451, Region::VesturlandOgVestfirdir, "Patreksfjörður", "Patreksfirði", PostcodeKind::Dreifbyli),
    (460, Region::VesturlandOgVestfirdir, "Tálknafjörður", "Tálknafirði", PostcodeKind::Thettbyli),
    (461, Region::VesturlandOgVestfirdir, "Tálknafjörður", "Tálknafirði", PostcodeKind::Dreifbyli),
    (465, Region::VesturlandOgVestfirdir, "Bíldudalur", "Bíldudal", PostcodeKind::Thettbyli),
    (466, Region::VesturlandOgVestfirdir, "Bíldudalur", "Bíldudal", PostcodeKind::Dreifbyli),
    (470, Region::VesturlandOgVestfirdir, "Þingeyri", "Þingeyri", PostcodeKind::Thettbyli),
    (471, Region::VesturlandOgVestfirdir, "Þingeyri", "Þingeyri", PostcodeKind::Dreifbyli),
    (500, Region::VesturlandOgVestfirdir, "Staður", "Stað", PostcodeKind::Dreifbyli),
    (510, Region::VesturlandOgVestfirdir, "Hólmavík", "Hólmavík", PostcodeKind::Thettbyli),
    (511, Region::VesturlandOgVestfirdir, "Hólmavík", "Hólmavík", PostcodeKind::Dreifbyli),
    (512, Region::VesturlandOgVestfirdir, "Hólmavík", "Hólmavík", PostcodeKind::Dreifbyli),
    (520, Region::VesturlandOgVestfirdir, "Drangsnes", "Drangsnesi", PostcodeKind::Thettbyli),
    (524, Region::VesturlandOgVestfirdir, "Árneshreppur", "Árneshreppi", PostcodeKind::Dreifbyli),
    (530, Region::Nordurland, "Hvammstangi", "Hvammstanga", PostcodeKind::Thettbyli),
    (531, Region::Nordurland, "Hvammstangi", "Hvammstanga", PostcodeKind::Dreifbyli),
    (540, Region::Nordurland, "Blönduós", "Blönduósi", PostcodeKind::Thettbyli),
    (541, Region::Nordurland, "Blönduós", "Blönduósi", PostcodeKind::Dreifbyli),
    (545, Region::Nordurland, "Skagaströnd", "Skagaströnd", PostcodeKind::Thettbyli),
    (546, Region::Nordurland, "Skagaströnd", "Skagaströnd", PostcodeKind::Dreifbyli),
    (550, Region::Nordurland, "Sauðárkrókur", "Sauðárkróki", PostcodeKind::Thettbyli),
    (551, Region::Nordurland, "Sauðárkrókur", "Sauðárkróki", PostcodeKind::Dreifbyli),
    (560, Region::Nordurland, "Varmahlíð", "Varmahlíð", PostcodeKind::Thettbyli),
    (561, Region::Nordurland, "Varmahlíð", "Varmahlíð", PostcodeKind::Dreifbyli),
    (565, Region::Nordurland, "Hofsós", "Hofsós", PostcodeKind::Thettbyli),
    (566, Region::Nordurland, "Hofsós", "Hofsós", PostcodeKind::Dreifbyli),
    (570, Region::Nordurland, "Fljót", "Fljótum", PostcodeKind::Dreifbyli),
    (580, Region::Nordurland, "Siglufjörður", "Siglufirði", PostcodeKind::Thettbyli),
    (581, Region::Nordurland, "Siglufjörður", "Siglufirði", PostcodeKind::Dreifbyli),
    (600, Region::Nordurland, "Akureyri", "Akureyri", PostcodeKind::Thettbyli),
    (601, Region::Nordurland, "Akureyri", "Akureyri", PostcodeKind::Dreifbyli),
    (602, Region::Nordurland, "Akureyri", "Akureyri", PostcodeKind::Postholf),
    (603, Region::Nordurland, "Akureyri", "Akureyri", PostcodeKind::Thettbyli),
    (610, Region::Nordurland, "Grenivík", "Grenivík", PostcodeKind::Thettbyli),
    (611, Region::Nordurland, "Grímsey", "Grímsey", PostcodeKind::Thettbyli),
    (616, Region::Nordurland, "Grenivík", "Grenivík", PostcodeKind::Dreifbyli),
    (620, Region::Nordurland, "Dalvík", "Dalvík", PostcodeKind::Thettbyli),
    (621, Region::Nordurland, "Dalvík", "Dalvík", PostcodeKind::Dreifbyli),
    (625, Region::Nordurland, "Ólafsfjörður", "Ólafsfirði", PostcodeKind::Thettbyli),
    (626, Region::Nordurland, "Ólafsfjörður", "Ólafsfirði", PostcodeKind::Dreifbyli),
    (630, Region::Nordurland, "Hrísey", "Hrísey", PostcodeKind::Thettbyli),
    (640, Region::Nordurland, "Húsavík", "Húsavík", PostcodeKind::Thettbyli),
    (641, Region::Nordurland, "Húsavík", "Húsavík", PostcodeKind::Dreifbyli),
    (645, Region::Nordurland, "Fosshólli", "Fosshólli", PostcodeKind::Dreifbyli),
    (650, Region::Nordurland, "Laugar", "Laugum", PostcodeKind::Thettbyli),
    (660, Region::Nordurland, "Mývatn", "Mývatni", PostcodeKind::Dreifbyli),
    (670, Region::Nordurland, "Kópasker", "Kópaskeri", PostcodeKind::Thettbyli),
    (671, Region::Nordurland, "Kópasker", "Kópaskeri", PostcodeKind::Dreifbyli),
    (675, Region::Nordurland, "Raufarhöfn", "Raufarhöfn", PostcodeKind::Thettbyli),
    (676, Region::Nordurland, "Raufarhöfn", "Raufarhöfn", PostcodeKind::Dreifbyli),
    (680, Region::Nordurland, "Þórshöfn", "Þórshöfn", PostcodeKind::Thettbyli),
    (681, Region::Nordurland, "Þórshöfn", "Þórshöfn", PostcodeKind::Dreifbyli),
    (685, Region::Nordurland, "Bakkafjörður", "Bakkafirði", PostcodeKind::Thettbyli),
    (686, Region::Nordurland, "Bakkafjörður", "Bakkafirði", PostcodeKind::Dreifbyli),
    (690, Region::Nordurland, "Vopnafjörður", "Vopnafirði", PostcodeKind::Thettbyli),
    (691, Region::Nordurland, "Vopnafjörður", "Vopnafirði", PostcodeKind::Dreifbyli),
    (700, Region::Austurland, "Egilsstaðir", "Egilsstöðum", PostcodeKind::Thettbyli),
    (701, Region::Austurland, "Egilsstaðir", "Egilsstöðum", PostcodeKind::Dreifbyli),
    (710, Region::Austurland, "Seyðisfjörður", "Seyðisfirði", PostcodeKind::Thettbyli),
    (711, Region::Austurland, "Seyðisfjörður", "Seyðisfirði", PostcodeKind::Dreifbyli),
    (715, Region::Austurland, "Mjóifjörður", "Mjóafirði", PostcodeKind::Dreifbyli),
    (720, Region::Austurland, "Borgarfjörður", "Borgarfirði (eystri)", PostcodeKind::Dreifbyli),
    (721, Region::Austurland, "Borgarfjörður", "Borgarfirði (eystri)", PostcodeKind::Dreifbyli),
    (730, Region::Austurland, "Reyðarfjörður", "Reyðarfirði", PostcodeKind::Thettbyli),
    (731, Region::Austurland, "Reyðarfjörður", "Reyðarfirði", PostcodeKind::Dreifbyli),
    (735, Region::Austurland, "Eskifjörður", "Eskifirði", PostcodeKind::Thettbyli),
    (736, Region::Austurland, "Eskifjörður", "Eskifirði", PostcodeKind::Dreifbyli),
    (740, Region::Austurland, "Neskaupstaður", "Neskaupstað", PostcodeKind::Thettbyli),
    (741, Region::Austurland, "Neskaupsstaður", "Neskaupsstað", PostcodeKind::Dreifbyli),
    (750, Region::Austurland, "Fáskrúðsfjörður", "Fáskrúðsfirði", PostcodeKind::Thettbyli),
    (751, Region::Austurland, "Fáskrúðsfjörður", "Fáskrúðsfirði", PostcodeKind::Dreifbyli),
    (755, Region::Austurland, "Stöðvarfjörður", "Stöðvarfirði", PostcodeKind::Thettbyli),
    (756, Region::Austurland, "Stöðvarfjörður", "Stöðvarfirði", PostcodeKind::Dreifbyli),
    (760, Region::Austurland, "Breiðdalsvík", "Breiðdalsvík", PostcodeKind::Thettbyli),
    (761, Region::Austurland, "Breiðdalsvík", "Breiðdalsvík", PostcodeKind::Dreifbyli),
    (765, Region::Austurland, "Djúpivogur", "Djúpavogi", PostcodeKind::Thettbyli),
    (766, Region::Austurland, "Djúpivogur", "Djúpavogi", PostcodeKind::Dreifbyli),
    (780, Region::Austurland, "Höfn í Hornafirði", "Höfn í Hornafirði", PostcodeKind::Thettbyli),
    (781, Region::Austurland, "Höfn í Hornafirði", "Höfn í Hornafirði", PostcodeKind::Dreifbyli),
    (785, Region::Austurland, "Öræfi", "Öræfum", PostcodeKind::Dreifbyli),
    (800, Region::SudurlandOgReykjanes, "Selfoss", "Selfossi", PostcodeKind::Thettbyli),
    (801, Region::SudurlandOgReykjanes, "Selfoss", "Selfossi", PostcodeKind::Dreifbyli),
    (802, Region::SudurlandOgReykjanes, "Selfoss", "Selfossi", PostcodeKind::Postholf),
    (810, Region::SudurlandOgReykjanes, "Hveragerði", "Hveragerði", PostcodeKind::Thettbyli),
    (815, Region::SudurlandOgReykjanes, "Þorlákshöfn", "Þorlákshöfn", PostcodeKind::Thettbyli),
    (816, Region::SudurlandOgReykjanes, "Ölfus", "Ölfus", PostcodeKind::Dreifbyli),
    (820, Region::SudurlandOgReykjanes, "Eyrarbakki", "Eyrarbakka", PostcodeKind::Thettbyli),
    (825, Region::SudurlandOgReykjanes, "Stokkseyri", "Stokkseyri", PostcodeKind::Thettbyli),
    (840, Region::SudurlandOgReykjanes, "Laugarvatn", "Laugarvatni", PostcodeKind::Thettbyli),
    (845, Region::SudurlandOgReykjanes, "Flúðir", "Flúðum", PostcodeKind::Thettbyli),
    (846, Region::SudurlandOgReykjanes, "Flúðir", "Flúðum", PostcodeKind::Dreifbyli),
    (850, Region::SudurlandOgReykjanes, "Hella", "Hellu", PostcodeKind::Thettbyli),
    (851, Region::SudurlandOgReykjanes, "Hella", "Hellu", PostcodeKind::Dreifbyli),
    (860, Region::SudurlandOgReykjanes, "Hvolsvöllur", "Hvolsvelli", PostcodeKind::Thettbyli),
    (861, Region::SudurlandOgReykjanes, "Hvolsvöllur", "Hvolsvelli", PostcodeKind::Dreifbyli),
    (870, Region::SudurlandOgReykjanes, "Vík", "Vík", PostcodeKind::Thettbyli),
    (871, Region::SudurlandOgReykjanes, "Vík", "Vík", PostcodeKind::Dreifbyli),
    (880, Region::SudurlandOgReykjanes, "Kirkjubæjarklaustur", "Kirkjubæjarklaustri", PostcodeKind::Thettbyli),
    (881, Region::SudurlandOgReykjanes, "Kirkjubæjarklaustur", "Kirkjubæjarklaustri", PostcodeKind::Dreifbyli),
    (900, Region::SudurlandOgReykjanes, "Vestmannaeyjar", "Vestmannaeyjum", PostcodeKind::Thettbyli),
    (902, Region::SudurlandOgReykjanes, "Vestmannaeyjar", "Vestmannaeyjum", PostcodeKind::Postholf),
];

/// Look up a postcode registry entry.
pub fn postcode_lookup(code: u32) -> Option<Postcode> {
    POSTCODES
        .binary_search_by_key(&code, |row| row.0)
        .ok()
        .map(|index| {
            let (code, region, stadur_nf, stadur_tgf, kind) = POSTCODES[index];
            Postcode {
                code,
                region,
                stadur_nf,
                stadur_tgf,
                kind,
            }
        })
}

/// All postcodes whose placename matches `name` in either grammatical
/// case, ascending. `partial` makes it a prefix match. Case-insensitive.
pub fn postcodes_for_placename(name: &str, partial: bool) -> Vec<u32> {
    let name = name.to_lowercase();
    POSTCODES
        .iter()
        .filter(|(_, _, stadur_nf, stadur_tgf, _)| {
            matches_either_case(&name, stadur_nf, stadur_tgf, partial)
        })
        .map(|row| row.0)
        .collect()
}

/// All postcodes within the region named `region`, ascending.
pub fn postcodes_for_region(region: &str, partial: bool) -> Vec<u32> {
    let region = region.to_lowercase();
    POSTCODES
        .iter()
        .filter(|(_, r, _, _, _)| {
            matches_either_case(&region, r.nominative(), r.dative(), partial)
        })
        .map(|row| row.0)
        .collect()
}

/// The region a postcode belongs to, in the nominative case.
pub fn region_for_postcode(code: u32) -> Option<&'static str> {
    postcode_lookup(code).map(|pc| pc.region.nominative())
}

fn matches_either_case(needle: &str, nf: &str, tgf: &str, partial: bool) -> bool {
    let nf = nf.to_lowercase();
    let tgf = tgf.to_lowercase();
    if partial {
        nf.starts_with(needle) || tgf.starts_with(needle)
    } else {
        nf == needle || tgf == needle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_complete() {
        assert!(POSTCODES.windows(2).all(|w| w[0].0 < w[1].0));
        for (_, _, stadur_nf, stadur_tgf, _) in POSTCODES {
            assert!(!stadur_nf.is_empty());
            assert!(!stadur_tgf.is_empty());
        }
    }

    #[test]
    fn lookup_known_codes() {
        let pc = postcode_lookup(101).unwrap();
        assert_eq!(pc.stadur_nf, "Reykjavík");
        assert_eq!(pc.region, Region::Hofudborgarsvaedid);
        assert_eq!(pc.kind.as_str(), "Þéttbýli");

        let pc = postcode_lookup(102).unwrap();
        assert_eq!(pc.stadur_nf, "Reykjavík");

        let pc = postcode_lookup(900).unwrap();
        assert_eq!(pc.stadur_nf, "Vestmannaeyjar");
        assert_eq!(pc.stadur_tgf, "Vestmannaeyjum");

        assert!(postcode_lookup(999).is_none());
    }

    #[test]
    fn placename_resolution_accepts_either_case() {
        let selfoss = vec![800, 801, 802];
        assert_eq!(postcodes_for_placename("Selfoss", false), selfoss);
        assert_eq!(postcodes_for_placename("selfossi", false), selfoss);
        assert_eq!(postcodes_for_placename("SELFOS", true), selfoss);
        assert!(postcodes_for_placename("SELFOS", false).is_empty());

        let kopavogur = postcodes_for_placename("Kópavogur", false);
        assert_eq!(kopavogur, postcodes_for_placename("kópavogi", false));
        assert_eq!(kopavogur, postcodes_for_placename("kópav", true));
        assert!(kopavogur.contains(&200));
    }

    #[test]
    fn region_resolution() {
        assert!(!postcodes_for_region("Norðurland", false).is_empty());
        assert!(!postcodes_for_region("Höfuðborgarsvæðinu", false).is_empty());
        assert!(!postcodes_for_region("Suður", true).is_empty());
        assert_eq!(region_for_postcode(101), Some("Höfuðborgarsvæðið"));
        assert_eq!(region_for_postcode(620), Some("Norðurland"));
        assert_eq!(region_for_postcode(999), None);
    }
}
