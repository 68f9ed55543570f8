use crate::args::*;
use crate::classpath::class_to_path;
use crate::error::*;
use crate::platform::{Native, Platform};
use jni::objects::{JObject, JObjectArray, JString, JValue};
use jni::signature::{Primitive, ReturnType};
use jni::sys;
use jni::JNIEnv;
use std::ffi::{c_char, c_void};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

const CREATE_JAVA_VM: &str = "JNI_CreateJavaVM";
const MAIN_SIGNATURE: &str = "([Ljava/lang/String;)V";
const LAUNCHER_ONLY: [&str; 2] = ["-client", "-server"];

type CreateJavaVm = unsafe extern "system" fn(
    pvm: *mut *mut sys::JavaVM,
    penv: *mut *mut c_void,
    args: *mut c_void,
) -> sys::jint;

static VM_CREATED: AtomicBool = AtomicBool::new(false);

pub fn  vm_created() -> bool
{
    VM_CREATED.load(Ordering::SeqCst)
}

pub fn  check_options(opts: &[&str]) -> Result<()>
{
    match opts.iter().copied().find(|o| LAUNCHER_ONLY.contains(o))
    {
        Some(opt) => Err(LaunchError::LauncherOnlyOption(opt.to_string())),
        None => Ok(()),
    }
}

/// Runs `main` of the requested class on a VM created in this process.
///
/// Returns `Ok(false)` when `main` throws; the exception is logged and
/// cleared. Every bootstrap failure is an error.
pub fn  launch_in_proc(spec: &LaunchSpec) -> Result<bool>
{
    check_options(&spec.java_opts)?;
    if vm_created()
    {
        return Err(LaunchError::VmAlreadyCreated);
    }
    let main_class = spec.main_class.ok_or_else(||
    {
        LaunchError::Argument("in-process launch needs a main class".to_string())
    })?;
    let create_java_vm = load_entry_point(spec.jli_library, spec.jvm_library)?;
    let mut env = create_vm(create_java_vm, &spec.java_opts)?;
    run_main(&mut env, main_class, &spec.program_args)
}

fn load_entry_point(jli_library: &str, jvm_library: &str) -> Result<CreateJavaVm>
{
    if let Some(helper) = Native::preload_helper(jli_library)?
    {
        debug!("loaded {jli_library}");
        std::mem::forget(helper);
    }
    let lib = Native::load_library(jvm_library)?;
    debug!("loaded {jvm_library}");
    let create_java_vm = unsafe { lib.get::<CreateJavaVm>(b"JNI_CreateJavaVM\0") }
        .map(|symbol| *symbol)
        .map_err(|source| LaunchError::EntryPointNotFound { symbol: CREATE_JAVA_VM, source })?;
    std::mem::forget(lib);
    Ok(create_java_vm)
}

fn create_vm<'local>(create_java_vm: CreateJavaVm, opts: &[&str]) -> Result<JNIEnv<'local>>
{
    let strings = to_c_strings(opts)?;
    let mut options: Vec<sys::JavaVMOption> = strings
        .iter()
        .map(|s| sys::JavaVMOption
        {
            optionString: s.as_ptr() as *mut c_char,
            extraInfo:    ptr::null_mut(),
        })
        .collect();
    let mut init_args = sys::JavaVMInitArgs
    {
        version:            sys::JNI_VERSION_1_4,
        nOptions:           options.len() as sys::jint,
        options:            options.as_mut_ptr(),
        ignoreUnrecognized: sys::JNI_FALSE,
    };
    let mut vm: *mut sys::JavaVM = ptr::null_mut();
    let mut env: *mut c_void = ptr::null_mut();

    if VM_CREATED.swap(true, Ordering::SeqCst)
    {
        return Err(LaunchError::VmAlreadyCreated);
    }
    let code = unsafe
    {
        create_java_vm(&mut vm, &mut env, &mut init_args as *mut sys::JavaVMInitArgs as *mut c_void)
    };
    if code != sys::JNI_OK
    {
        return Err(LaunchError::VmCreation(code));
    }
    debug!("created JVM with {} option(s)", opts.len());
    Ok(unsafe { JNIEnv::from_raw(env as *mut sys::JNIEnv) }?)
}

fn run_main(env: &mut JNIEnv, main_class: &str, program_args: &[&str]) -> Result<bool>
{
    let class = match env.find_class(class_to_path(main_class))
    {
        Ok(class) => class,
        Err(e) =>
        {
            debug!("FindClass({main_class}) failed: {e}");
            clear_pending(env);
            return Err(LaunchError::ClassNotFound(main_class.to_string()));
        }
    };
    let main = match env.get_static_method_id(&class, "main", MAIN_SIGNATURE)
    {
        Ok(id) => id,
        Err(e) =>
        {
            debug!("GetStaticMethodID(main) failed: {e}");
            clear_pending(env);
            return Err(LaunchError::MethodNotFound);
        }
    };
    let args = JObject::from(string_array(env, program_args)?);

    let result = unsafe
    {
        env.call_static_method_unchecked(
            &class,
            main,
            ReturnType::Primitive(Primitive::Void),
            &[JValue::Object(&args).as_jni()],
        )
    };
    match result
    {
        Ok(_) => Ok(true),
        Err(jni::errors::Error::JavaException) =>
        {
            let msg = describe_exception(env)?;
            warn!("{main_class}.main threw {msg}");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn string_array<'local>(env: &mut JNIEnv<'local>, args: &[&str]) -> Result<JObjectArray<'local>>
{
    let array = env.new_object_array(args.len() as sys::jsize, "java/lang/String", JObject::null())?;
    for (index, arg) in args.iter().enumerate()
    {
        let jstr = match env.new_string(*arg)
        {
            Ok(jstr) => jstr,
            Err(e) =>
            {
                clear_pending(env);
                return Err(LaunchError::StringConstruction { index, reason: e.to_string() });
            }
        };
        env.set_object_array_element(&array, index as sys::jsize, &jstr)?;
        env.delete_local_ref(jstr)?;
    }
    Ok(array)
}

fn describe_exception(env: &mut JNIEnv) -> Result<String>
{
    if !env.exception_check()?
    {
        return Ok("an exception without details".to_string());
    }
    let exception = env.exception_occurred()?;
    env.exception_clear()?;
    let jstr = env.call_method(&exception, "toString", "()Ljava/lang/String;", &[])?.l()?;
    let msg: String = env.get_string(&JString::from(jstr))?.into();
    Ok(msg)
}

#[inline(always)]
fn clear_pending(env: &mut JNIEnv)
{
    if env.exception_check().unwrap_or(false)
    {
        let _ = env.exception_clear();
    }
}
