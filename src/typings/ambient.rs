//! Declarations the compiler cannot infer from the host's sources
//!
//! The runtime exposes a single global object plus a handful of helpers, and
//! several generic interfaces only exist as JSDoc conventions. They are
//! appended once per output. Values assigned to `globalConfig` outside the
//! compiled entry point are injected into its namespace.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Marker used to detect an already augmented text
const AMBIENT_MARKER: &str = "declare interface FactoryTemplate<T>";

const AMBIENT_BLOCK: &str = r#"
declare const shapez: any;
declare function $shapez_registerMod(
    mod: typeof import("%PREFIX%/mods/mod").Mod,
    meta: import("%PREFIX%/mods/modloader").ModMetadata
): void;

declare function assert(condition: boolean | object | string, ...errorMessage: string[]): void;
declare function assertAlways(condition: boolean | object | string, ...errorMessage: string[]): void;

declare interface FactoryTemplate<T> {
    entries: Array<T>;
    entryIds: Array<string>;
    idToEntry: any;

    getId(): string;
    getAllIds(): Array<string>;
    register(entry: T): void;
    hasId(id: string): boolean;
    findById(id: string): T;
    getEntries(): Array<T>;
    getNumEntries(): number;
}

declare interface SingletonFactoryTemplate<T> {
    entries: Array<T>;
    idToEntry: any;

    getId(): string;
    getAllIds(): Array<string>;
    register(classHandle: T): void;
    hasId(id: string): boolean;
    findById(id: string): T;
    findByClass(classHandle: T): T;
    getEntries(): Array<T>;
    getNumEntries(): number;
}

declare class TypedTrackedState<T> {
    constructor(callbackMethod?: (value: T) => void, callbackScope?: any);

    set(value: T, changeHandler?: (value: T) => void, changeScope?: any): void;

    setSilent(value: any): void;
    get(): T;
}

declare interface TypedSignal<T extends Array<any>> {
    add(receiver: (...args: T) => /* STOP_PROPAGATION */ string | void, scope?: object): void;
    addToTop(receiver: (...args: T) => /* STOP_PROPAGATION */ string | void, scope?: object): void;
    remove(receiver: (...args: T) => /* STOP_PROPAGATION */ string | void): void;

    dispatch(...args: T): /* STOP_PROPAGATION */ string | void;

    removeAll(): void;
}

declare type Layer = "regular" | "wires";
declare type ItemType = "shape" | "color" | "boolean";

declare function NonAbstract<
    C extends abstract new (...args: any) => any = typeof import("%PREFIX%/savegame/serialization_data_types").BaseDataType,
    T = InstanceType<C>
>(cls: C):
    | Pick<C, keyof C> & {
        new (...a: ConstructorParameters<C>): {
            [k in keyof T]: T[k];
        };
    };
"#;

/// Numeric tuning constants assigned outside the compiled sources
const GLOBAL_CONFIG_CONSTANTS: &[&str] = &[
    "tileSize",
    "halfTileSize",
    "beltSpeedItemsPerSecond",
    "achievementSliceDuration",
    "itemSpacingOnBelts",
    "assetsDpi",
    "assetsSharpness",
    "puzzleModeSpeed",
    "chunkAggregateSize",
    "mapChunkSize",
    "readerAnalyzeIntervalSeconds",
];

const GLOBAL_CONFIG_SMOOTHING: &str =
    "export const smoothing: {\n    quality: string;\n    smoothMainCanvas: boolean;\n};";

/// Flags of `globalConfig.debug`
const DEBUG_FLAGS: &[(&str, &str)] = &[
    ("renderForTrailer", "boolean"),
    ("framePausesBetweenTicks", "number"),
    ("disableSavegameWrite", "boolean"),
    ("fastGameEnter", "boolean"),
    ("noArtificialDelays", "boolean"),
    ("testClipping", "boolean"),
    ("logTimestamps", "boolean"),
    ("disableLoggingLogSources", "boolean"),
    ("testTranslations", "boolean"),
    ("disableMapOverwiew", "boolean"),
    ("disableTimedButtons", "boolean"),
    ("testAchievements", "boolean"),
    ("checkBeltPaths", "boolean"),
    ("instantBelts", "boolean"),
    ("blueprintsNoCost", "boolean"),
    ("testCulling", "boolean"),
    ("manualTickOnly", "boolean"),
    ("disableLogicTicks", "boolean"),
    ("showAtlasInfo", "boolean"),
    ("disableSlowAsserts", "boolean"),
    ("allBuildingsUnlocked", "boolean"),
    ("showAcceptorEjectors", "boolean"),
    ("showEntityBounds", "boolean"),
    ("enableEnitityInspector", "boolean"),
    ("renderChanges", "boolean"),
    ("disableUnlockDialog", "boolean"),
    ("instantMiners", "boolean"),
    ("doNotRenderStatics", "boolean"),
    ("renderWireRotations", "boolean"),
    ("framePausedBetweenTicks", "boolean"),
    ("externalModUrl", "string"),
    ("disableMusic", "boolean"),
    ("testAds", "boolean"),
    ("testPuzzleMod", "boolean"),
];

const GLOBAL_CONFIG_HEADER: &str = "export namespace globalConfig {";

#[allow(clippy::expect_used)]
static EXPORTED_CONST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export (?:const|let|var) (\w+)").expect("valid regex")
});

/// The fixed block of ambient declarations for a namespace prefix
pub fn ambient_block(prefix: &str) -> String {
    AMBIENT_BLOCK.replace("%PREFIX%", prefix)
}

/// Append the ambient block unless the text already carries it
///
/// Returns whether the block was appended.
pub fn append_ambient(text: &mut String, prefix: &str) -> bool {
    if text.contains(AMBIENT_MARKER) {
        return false;
    }
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&ambient_block(prefix));
    true
}

/// Every `globalConfig` member the extension provides, with its declaration
pub fn global_config_members() -> Vec<(&'static str, String)> {
    let mut members: Vec<(&'static str, String)> = GLOBAL_CONFIG_CONSTANTS
        .iter()
        .map(|name| (*name, format!("export const {name}: number;")))
        .collect();

    members.push(("smoothing", GLOBAL_CONFIG_SMOOTHING.to_string()));

    let mut debug = String::from("export const debug: {\n");
    for (flag, ty) in DEBUG_FLAGS {
        debug.push_str(&format!("    {flag}: {ty};\n"));
    }
    debug.push_str("};");
    members.push(("debug", debug));

    members
}

/// Inject missing members into the first `globalConfig` namespace
///
/// Returns the names that were injected; empty when the namespace is absent
/// or already declares every member.
pub fn extend_global_config(text: &str) -> (String, Vec<String>) {
    let Some(header_start) = text.find(GLOBAL_CONFIG_HEADER) else {
        return (text.to_string(), Vec::new());
    };
    let body_start = header_start + GLOBAL_CONFIG_HEADER.len();
    let body_end = matching_brace(text, body_start - 1).unwrap_or(text.len());
    let body = &text[body_start..body_end];

    let existing: HashSet<&str> = EXPORTED_CONST
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    let mut injected = Vec::new();
    let mut insertion = String::new();
    for (name, declaration) in global_config_members() {
        if existing.contains(name) {
            continue;
        }
        insertion.push('\n');
        insertion.push_str(&declaration);
        injected.push(name.to_string());
    }

    if injected.is_empty() {
        return (text.to_string(), injected);
    }

    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..body_start]);
    out.push_str(&insertion);
    out.push_str(&text[body_start..]);
    (out, injected)
}

/// Offset of the `}` closing the `{` at `open`
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open + idx);
                }
            }
            _ => {}
        }
    }
    None
}
