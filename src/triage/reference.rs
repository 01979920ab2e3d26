//! Fixed protocol text: base checklists, trigger tokens, and the per-branch
//! action/flag strings. Everything the engines emit lives here as constants,
//! outside the control flow, so each trigger can be enumerated and tested
//! independently of the branch logic.

// ---------------------------------------------------------------------------
// Civilian protocol: base lists
// ---------------------------------------------------------------------------

/// First two immediate actions of every civilian assessment, in priority order.
pub const UNIVERSAL_ACTIONS: [&str; 2] = [
    "Ensure scene safety.",
    "Call for emergency medical services if possible and not already done.",
];

/// ABCDE primary survey. Constant across all successful civilian assessments.
pub const PRIMARY_SURVEY_STEPS: [&str; 6] = [
    "Check for responsiveness (AVPU: Alert, Verbal, Painful, Unresponsive).",
    "Assess Airway (A): Is it clear? Any obstructions? Consider C-spine immobilization if trauma mechanism suggests.",
    "Assess Breathing (B): Rate, depth, effort. Look for chest rise and fall. Check for cyanosis.",
    "Assess Circulation (C): Check for major bleeding. Check pulse (rate, rhythm, strength). Check skin color, temperature, and capillary refill.",
    "Assess Disability (D): Neurological status (e.g., GCS if trained, pupil response, orientation).",
    "Expose and Examine (E): Systematically check for injuries from head to toe, maintaining spinal precautions if suspected neck/back injury. Keep patient warm.",
];

/// Baseline red-flag reference list; triggered flags are appended after it.
pub const BASE_RED_FLAGS: [&str; 7] = [
    "Unresponsiveness or significantly altered mental status.",
    "Difficulty breathing, gasping, or no breathing.",
    "Absent or very weak pulse, signs of shock (pale, cool, clammy skin).",
    "Severe, uncontrolled external bleeding.",
    "Penetrating trauma to head, neck, chest, or abdomen.",
    "Suspected spinal injury (e.g., fall from height, diving accident, high-speed MVA).",
    "Open fractures or severe deformities.",
];

/// Follow-up checklist. Constant across all successful civilian assessments.
pub const FOLLOW_UP_STEPS: [&str; 5] = [
    "Reassess ABCDEs frequently (e.g., every 5 minutes for critical, 15 for stable).",
    "Treat life-threatening injuries found during assessment immediately (e.g., control major bleeding, basic airway maneuvers, CPR if indicated).",
    "Maintain body temperature (prevent hypothermia).",
    "Gather SAMPLE history if possible (Signs/Symptoms, Allergies, Medications, Past medical history, Last oral intake, Events leading to injury).",
    "Prepare for transport or await arrival of higher-level care.",
];

// ---------------------------------------------------------------------------
// Civilian protocol: triggers and their effects
// ---------------------------------------------------------------------------

/// Symptom tokens indicating airway or breathing compromise (exact, lowered).
pub const BREATHING_DISTRESS_SYMPTOMS: [&str; 4] = [
    "difficulty breathing",
    "shortness of breath",
    "no breathing",
    "gasping",
];

/// Mechanism phrases carrying spinal/internal-injury risk (substring, lowered).
pub const HIGH_RISK_MECHANISMS: [&str; 3] =
    ["fall from height", "motor vehicle accident", "diving accident"];

/// Symptom token equivalent to observed bleeding (exact, lowered).
pub const SEVERE_BLEEDING_SYMPTOM: &str = "severe bleeding";

/// Mechanism marker that upgrades a bleeding casualty to critical.
pub const ARTERIAL_MARKER: &str = "arterial";

/// Symptom token for the cross-cutting cardiac escalation (exact, lowered).
pub const CHEST_PAIN_SYMPTOM: &str = "chest pain";

pub const CPR_ACTION: &str =
    "If not breathing or only gasping, begin CPR immediately if trained and appropriate.";
pub const BLEEDING_CONTROL_ACTION: &str = "Apply direct pressure to any sites of major bleeding. Elevate if possible. Consider tourniquet for life-threatening limb hemorrhage.";
pub const AIRWAY_ACTION: &str =
    "Ensure airway is open. Assist ventilations if necessary and trained.";
pub const SPINAL_ACTION: &str = "Maintain spinal immobilization if suspected neck/back injury.";

pub const UNCONSCIOUS_FLAG: &str = "Patient is unconscious.";
pub const BLEEDING_FLAG: &str = "Obvious or reported severe bleeding.";
pub const BREATHING_FLAG: &str = "Reported difficulty breathing or abnormal breathing pattern.";
pub const HIGH_RISK_MECHANISM_FLAG: &str =
    "High-risk mechanism of injury (potential for internal or spinal injuries).";
pub const CHEST_PAIN_FLAG: &str =
    "Reported chest pain - consider cardiac or significant thoracic trauma.";

// ---------------------------------------------------------------------------
// Military field protocol
// ---------------------------------------------------------------------------

/// Provenance label carried in `protocol_source`.
pub const FIELD_PROTOCOL_SOURCE: &str =
    "Military field first-aid protocol (care under fire / tactical field care reference).";

/// Care-under-fire immediate actions, in priority order.
pub const CARE_UNDER_FIRE_ACTIONS: [&str; 4] = [
    "Move the casualty and yourself to effective cover.",
    "Stop life-threatening limb hemorrhage with a tourniquet applied over the uniform.",
    "Direct the casualty to continue self-aid if able and keep them engaged.",
    "Defer airway management until no longer under effective fire.",
];

/// ABC field survey, performed once under cover.
pub const FIELD_SURVEY_STEPS: [&str; 4] = [
    "Check responsiveness and breathing.",
    "Airway (A): open with head-tilt/chin-lift or jaw thrust; insert nasopharyngeal airway if trained.",
    "Breathing (B): look, listen, and feel; seal any open chest wound with an occlusive dressing.",
    "Circulation (C): blood sweep for bleeding; check radial pulse, skin color, and temperature.",
];

/// Lifesaving steps, used as the field protocol's next steps.
pub const LIFESAVING_STEPS: [&str; 6] = [
    "Check for responsiveness.",
    "Position the casualty and open the airway.",
    "Check for breathing; ventilate if absent and trained.",
    "Check for bleeding and control it.",
    "Check for signs of shock and treat (position, maintain warmth).",
    "Dress and bandage wounds; monitor until evacuation.",
];

/// Field-protocol baseline red flags.
pub const FIELD_RED_FLAGS: [&str; 4] = [
    "Unresponsiveness or significantly altered mental status.",
    "Life-threatening external hemorrhage.",
    "Absent breathing or sucking chest wound.",
    "Signs of shock (weak rapid pulse; pale, cool, clammy skin).",
];

/// Symptom token that triggers the heat-injury extension (exact, lowered).
pub const HEAT_STROKE_SYMPTOM: &str = "heat stroke";

/// Heat-injury treatment steps appended to next steps when triggered.
pub const HEAT_INJURY_STEPS: [&str; 4] = [
    "Move the casualty to shade and loosen or remove outer clothing.",
    "Cool rapidly: douse with water and fan; apply ice sheets if available.",
    "Give small sips of cool water only if fully conscious and able to swallow.",
    "Evacuate as a priority; heat stroke is life-threatening.",
];

pub const FIELD_UNRESPONSIVE_FLAG: &str = "Casualty is unresponsive.";
pub const FIELD_HEMORRHAGE_FLAG: &str = "Life-threatening external hemorrhage suspected.";
pub const FIELD_HEAT_FLAG: &str = "Suspected heat stroke (treat and evacuate immediately).";

// ---------------------------------------------------------------------------
// Sentinel (legacy error channel)
// ---------------------------------------------------------------------------

pub const SENTINEL_IMMEDIATE_ACTION: &str =
    "Error: Missing required patient data (mechanismOfInjury, reportedSymptoms, conscious).";
pub const SENTINEL_RED_FLAG: &str = "Missing critical input data.";
pub const SENTINEL_NEXT_STEP: &str = "Re-submit with complete data.";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Copy a constant table into a fresh owned list. Every assessment mutates
/// its own copy; the constants are never aliased across calls.
pub fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}
