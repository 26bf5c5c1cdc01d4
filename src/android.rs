//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{catalog_to_json, render_chord_to_svg};

fn to_jstring(env: &mut JNIEnv, value: crate::Result<String>) -> jstring {
    match value {
        Ok(s) => match env.new_string(&s) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a catalog entry to SVG.
///
/// Called from Kotlin as:
///   external fun renderChord(instrument: String, name: String, optionsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_starkids_studio_DiagramLib_renderChord(
    mut env: JNIEnv,
    _class: JClass,
    instrument: JString,
    name: JString,
    options_json: JString,
) -> jstring {
    let instrument: String = match env.get_string(&instrument) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let name: String = match env.get_string(&name) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let options: Option<String> = if options_json.is_null() {
        None
    } else {
        env.get_string(&options_json).ok().map(|s| s.into())
    };

    let result = render_chord_to_svg(&instrument, &name, options.as_deref());
    to_jstring(&mut env, result)
}

/// Catalog listing as JSON.
///
/// Called from Kotlin as:
///   external fun catalogJson(): String?
#[no_mangle]
pub extern "system" fn Java_com_starkids_studio_DiagramLib_catalogJson(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    to_jstring(&mut env, catalog_to_json())
}
